use rand::Rng;
use rand::seq::SliceRandom;

pub struct QuickReplyChip {
    pub label: &'static str,
    pub text: &'static str,
}

pub const FALLBACK_MESSAGES: [&str; 10] = [
    "請輸入關鍵字（例：休學、獎學金、宿舍、加退選）。我會告訴你該找哪個處室與分機。",
    "我還不確定你要找哪個單位，試著輸入辦理的事項，例如「休學」或「宿舍」。",
    "抱歉，沒有找到對應的處室。可以換個關鍵字再試一次嗎？",
    "想知道該找誰嗎？輸入像「獎學金」、「加退選」這樣的關鍵字就可以囉！",
    "這個問題我找不到負責單位，請試試下方的常見選項。",
    "請用簡短的關鍵字描述你的需求，例如「成績單」或「學分抵免」。",
    "我只認得校內業務的關鍵字喔，點選下方按鈕看看常見問題。",
    "找不到相符的單位。輸入處室名稱（例：教務處）也可以查詢分機。",
    "嗨！告訴我你要辦的事情，我幫你找承辦單位與分機。",
    "沒有對應的結果，換個說法或點選下方的快速選項試試看。",
];

pub const QUICK_REPLIES: [QuickReplyChip; 8] = [
    QuickReplyChip { label: "休學", text: "休學" },
    QuickReplyChip { label: "復學", text: "復學" },
    QuickReplyChip { label: "獎學金", text: "獎學金" },
    QuickReplyChip { label: "宿舍", text: "宿舍" },
    QuickReplyChip { label: "加退選", text: "加退選" },
    QuickReplyChip { label: "成績單", text: "成績單" },
    QuickReplyChip { label: "學分抵免", text: "學分抵免" },
    QuickReplyChip { label: "兵役", text: "兵役" },
];

/// Draws one fallback message uniformly. Each call is an independent draw.
pub fn pick_fallback<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_MESSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn catalog_entries_are_non_empty() {
        assert!(FALLBACK_MESSAGES.iter().all(|message| !message.trim().is_empty()));
        assert!(QUICK_REPLIES.iter().all(|chip| !chip.label.is_empty() && !chip.text.is_empty()));
    }

    #[test]
    fn picks_are_catalog_members() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(FALLBACK_MESSAGES.contains(&pick_fallback(&mut rng)));
        }
    }

    #[test]
    fn picks_cover_more_than_one_message() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..200).map(|_| pick_fallback(&mut rng)).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn quick_reply_labels_fit_line_limit() {
        assert!(QUICK_REPLIES.iter().all(|chip| chip.label.chars().count() <= 20));
    }
}
