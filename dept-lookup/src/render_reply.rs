use crate::record::DepartmentRecord;

pub fn render_reply(record: &DepartmentRecord) -> String {
    format!(
        "你可以洽詢【{}】（分機：{}）。\n網址：{}",
        record.unit_display(),
        record.ext_display(),
        record.url_display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_line_template() {
        let record = DepartmentRecord::new("教務處", "休學", "1234", "http://x");
        assert_eq!(
            render_reply(&record),
            "你可以洽詢【教務處】（分機：1234）。\n網址：http://x"
        );
    }

    #[test]
    fn renders_placeholders_for_blank_fields() {
        let record = DepartmentRecord::new("", "休學", "", "");
        assert_eq!(
            render_reply(&record),
            "你可以洽詢【（未填寫單位）】（分機：N/A）。\n網址：（無）"
        );
    }
}
