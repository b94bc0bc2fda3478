use dept_lookup::{Mapping, Resolution};
use rand::Rng;
use tracing::debug;

use crate::fallback::{QUICK_REPLIES, pick_fallback};
use crate::line::TextMessage;

pub fn respond(mapping: &Mapping, user_text: &str) -> TextMessage {
    respond_with(mapping, user_text, &mut rand::thread_rng())
}

/// Contact reply for a match; otherwise a random fallback with the quick-reply chips.
pub fn respond_with<R: Rng + ?Sized>(
    mapping: &Mapping,
    user_text: &str,
    rng: &mut R,
) -> TextMessage {
    match mapping.resolve(user_text) {
        Resolution::Reply(reply) => {
            debug!(
                unit = %reply.unit,
                pass = ?reply.pass,
                term = %reply.term,
                "matched department"
            );
            TextMessage::plain(reply.text)
        }
        Resolution::NoMatch => {
            debug!("no department matched; sending fallback");
            TextMessage::with_quick_replies(pick_fallback(rng), &QUICK_REPLIES)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::FALLBACK_MESSAGES;
    use dept_lookup::DepartmentRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mapping() -> Mapping {
        Mapping::from_iter([DepartmentRecord::new("教務處", "休學|復學", "1234", "http://x")])
    }

    #[test]
    fn matched_text_gets_plain_contact_reply() {
        let message = respond(&mapping(), "我想辦休學");
        assert_eq!(message.text, "你可以洽詢【教務處】（分機：1234）。\n網址：http://x");
        assert!(message.quick_reply.is_none());
    }

    #[test]
    fn unmatched_text_gets_fallback_with_all_chips() {
        let mut rng = StdRng::seed_from_u64(1);
        let message = respond_with(&mapping(), "哈囉", &mut rng);
        assert!(FALLBACK_MESSAGES.contains(&message.text.as_str()));
        let items = message.quick_reply.expect("quick replies").items;
        let labels: Vec<_> = items.iter().map(|item| item.action.label.as_str()).collect();
        let expected: Vec<_> = QUICK_REPLIES.iter().map(|chip| chip.label).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn chips_do_not_depend_on_chosen_message() {
        let first = respond_with(&mapping(), "哈囉", &mut StdRng::seed_from_u64(3));
        let second = respond_with(&mapping(), "哈囉", &mut StdRng::seed_from_u64(99));
        assert_eq!(first.quick_reply, second.quick_reply);
    }
}
