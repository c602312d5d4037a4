//! Travel block classifier.

use tracing::trace;

use crate::domain::TravelRecord;
use crate::markup::{StreamError, Token, TokenSource};

use super::error::ClassifyError;
use super::extract::commit;
use super::state::{ActiveField, ClassificationState};

/// Elements that delimit semantic regions in a booking page.
const CONTAINER_TAGS: [&str; 2] = ["div", "span"];

fn is_container(name: &str) -> bool {
    CONTAINER_TAGS.contains(&name)
}

/// Classify one travel block into a record.
///
/// `source` must be positioned just after the block's opening tag. Tokens
/// are consumed until that tag is closed; the source is left right after
/// the closing tag. Only `div` and `span` affect nesting. Self-closing
/// containers and other elements are transparent.
///
/// If the stream ends or fails first, the partial record is returned inside
/// [`ClassifyError::Stream`] and must be discarded.
pub fn classify_entry<S>(source: &mut S) -> Result<TravelRecord, ClassifyError>
where
    S: TokenSource + ?Sized,
{
    let mut state = ClassificationState::new();
    let mut record = TravelRecord::new();

    loop {
        let token = match source.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => return Err(ClassifyError::stream(record, StreamError::UnexpectedEnd)),
            Err(e) => return Err(ClassifyError::stream(record, e)),
        };

        match token {
            Token::StartTag(tag) => {
                if is_container(&tag.name) && !tag.self_closing {
                    state.open(&tag)?;
                }
            }
            Token::EndTag { name } => {
                if is_container(&name) && state.close() {
                    return Ok(record);
                }
            }
            Token::Text(content) => {
                let text = content.trim();
                if text.is_empty() {
                    continue;
                }
                if let ActiveField::Field(field) = state.active() {
                    trace!(?field, text, depth = state.depth(), "committing text");
                    commit(&mut record, field, text);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Context, DirectionalLabel};
    use crate::markup::{Tag, TokenQueue};

    fn open(name: &str, class: &str) -> Token {
        Token::StartTag(Tag::new(name).with_attr("class", class))
    }

    fn bare(name: &str) -> Token {
        Token::StartTag(Tag::new(name))
    }

    fn text(s: &str) -> Token {
        Token::text(s)
    }

    fn close(name: &str) -> Token {
        Token::end(name)
    }

    /// `<div class=...>text</div>`
    fn labelled(class: &str, value: &str) -> Vec<Token> {
        vec![open("div", class), text(value), close("div")]
    }

    fn run(tokens: Vec<Token>) -> (Result<TravelRecord, ClassifyError>, TokenQueue) {
        let mut queue = TokenQueue::new(tokens);
        let result = classify_entry(&mut queue);
        (result, queue)
    }

    fn block(body: Vec<Vec<Token>>) -> Vec<Token> {
        let mut tokens: Vec<Token> = body.into_iter().flatten().collect();
        tokens.push(close("div"));
        tokens
    }

    #[test]
    fn full_block_is_classified() {
        let tokens = block(vec![
            vec![open("div", "departure")],
            vec![open("span", "travelTime libStatus4"), text("08:15"), close("span")],
            vec![open("span", "travelStation"), text("Paris Gare de Lyon"), close("span")],
            vec![close("div")],
            vec![open("div", "arrival")],
            vec![open("span", "travelTime libStatus4"), text(" 10:40 "), close("span")],
            vec![open("span", "travelStation"), text("Lyon Part Dieu"), close("span")],
            vec![close("div")],
            vec![open("div", "duration"), text("Durée : 2h25"), close("div")],
            vec![open("div", "placementInfo")],
            vec![bare("span"), text("Voiture 012"), close("span")],
            vec![bare("span"), text("Place 034"), close("span")],
            vec![close("div")],
            vec![open("div", "trainInfo"), text("TGV INOUI 6607"), close("div")],
            vec![open("div", "placementType"), text("Assis 2nde classe"), close("div")],
            vec![open("div", "prnLocatorValue"), text("ABC123"), close("div")],
        ]);

        let (result, queue) = run(tokens);
        let record = result.unwrap();
        assert_eq!(
            record,
            TravelRecord {
                start: "08:15".into(),
                end: "10:40".into(),
                duration: "2h25".into(),
                from: "Paris Gare de Lyon".into(),
                to: "Lyon Part Dieu".into(),
                car: "012".into(),
                seat: "034".into(),
                train: "6607".into(),
                reference: "ABC123".into(),
                place_type: "Assis 2nde classe".into(),
            }
        );
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn context_drives_time_and_station() {
        let tokens = block(vec![
            vec![open("div", "departure")],
            vec![open("div", "travelTime libStatus4"), text("08:15"), close("div")],
            vec![open("div", "travelStation"), text("Paris"), close("div")],
            vec![close("div")],
            vec![open("div", "arrival")],
            vec![open("div", "travelTime libStatus4"), text("10:40"), close("div")],
            vec![open("div", "travelStation"), text("Lyon"), close("div")],
            vec![close("div")],
        ]);

        let (result, _) = run(tokens);
        let record = result.unwrap();
        assert_eq!(record.start, "08:15");
        assert_eq!(record.from, "Paris");
        assert_eq!(record.end, "10:40");
        assert_eq!(record.to, "Lyon");
    }

    #[test]
    fn last_duration_wins() {
        let tokens = block(vec![
            vec![open("div", "duration"), text("xx 1:05"), close("div")],
            vec![open("div", "duration"), text("xx 2:10"), close("div")],
        ]);
        let (result, _) = run(tokens);
        assert_eq!(result.unwrap().duration, "2:10");
    }

    #[test]
    fn placement_children_fill_car_and_seat() {
        let tokens = block(vec![
            vec![open("div", "placementInfo")],
            vec![bare("span"), text("Voiture 012"), close("span")],
            vec![open("span", ""), text("Place 034"), close("span")],
            vec![bare("span"), text("Côté fenêtre"), close("span")],
            vec![close("div")],
        ]);
        let (result, _) = run(tokens);
        let record = result.unwrap();
        assert_eq!(record.car, "012");
        assert_eq!(record.seat, "034");
    }

    #[test]
    fn remaining_fields() {
        let tokens = block(vec![
            vec![open("div", "trainInfo"), text("TGV INOUI 6607"), close("div")],
            vec![open("span", "placementType"), text("  Salle basse  "), close("span")],
            vec![open("span", "prnLocatorValue"), text("QWERTY"), close("span")],
        ]);
        let (result, _) = run(tokens);
        let record = result.unwrap();
        assert_eq!(record.train, "6607");
        assert_eq!(record.place_type, "Salle basse");
        assert_eq!(record.reference, "QWERTY");
    }

    #[test]
    fn text_goes_to_most_recently_opened_container() {
        // The station text follows the icon span, which reset the field.
        let tokens = block(vec![
            vec![open("div", "departure")],
            vec![open("div", "travelStation")],
            vec![open("span", "icon"), close("span")],
            vec![text("Paris")],
            vec![close("div"), close("div")],
        ]);
        let (result, _) = run(tokens);
        assert_eq!(result.unwrap().from, "");
    }

    #[test]
    fn nested_unclassed_span_keeps_field() {
        let tokens = block(vec![
            vec![open("div", "arrival")],
            vec![open("div", "travelStation")],
            vec![bare("span"), text("Marseille St-Charles"), close("span")],
            vec![close("div"), close("div")],
        ]);
        let (result, _) = run(tokens);
        assert_eq!(result.unwrap().to, "Marseille St-Charles");
    }

    #[test]
    fn stops_right_after_block_closes() {
        let mut tokens = block(vec![labelled("trainInfo", "TGV 6607")]);
        tokens.push(open("div", "trainInfo"));
        tokens.push(text("9999"));
        let (result, queue) = run(tokens);
        assert_eq!(result.unwrap().train, "6607");
        assert_eq!(queue.remaining(), 2);
    }

    #[test]
    fn whitespace_and_ignored_text_are_dropped() {
        let tokens = block(vec![
            vec![text("   \n\t ")],
            vec![open("div", "banner"), text("Bon voyage"), close("div")],
            vec![open("div", "duration"), text("   "), close("div")],
        ]);
        let (result, _) = run(tokens);
        assert_eq!(result.unwrap(), TravelRecord::new());
    }

    #[test]
    fn other_elements_do_not_nest() {
        let tokens = block(vec![
            vec![open("p", "duration"), text("1h00"), close("p")],
            vec![Token::StartTag(Tag::new("br"))],
            vec![open("div", "trainInfo"), text("1234")],
            vec![close("div")],
        ]);
        let (result, queue) = run(tokens);
        let record = result.unwrap();
        assert_eq!(record.duration, "");
        assert_eq!(record.train, "1234");
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn self_closing_container_is_transparent() {
        let mut empty = Tag::new("div").with_attr("class", "duration");
        empty.self_closing = true;
        let tokens = block(vec![
            vec![open("div", "trainInfo")],
            vec![Token::StartTag(empty)],
            vec![text("6607"), close("div")],
        ]);
        let (result, queue) = run(tokens);
        assert_eq!(result.unwrap().train, "6607");
        assert_eq!(queue.remaining(), 0);
    }

    #[test]
    fn premature_end_is_a_stream_error() {
        let tokens = vec![open("div", "trainInfo"), text("6607"), close("div")];
        let (result, _) = run(tokens);
        match result {
            Err(ClassifyError::Stream { partial, source }) => {
                assert_eq!(partial.train, "6607");
                assert!(matches!(source, StreamError::UnexpectedEnd));
            }
            other => panic!("expected stream error, got {other:?}"),
        }
    }

    #[test]
    fn read_failure_is_a_stream_error() {
        let mut queue = TokenQueue::new(vec![open("div", "duration"), text("0:45")]).failing_at_end();
        let err = classify_entry(&mut queue).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Stream {
                source: StreamError::Read(_),
                ..
            }
        ));
        assert_eq!(err.partial().unwrap().duration, "0:45");
    }

    #[test]
    fn time_label_without_direction_is_fatal() {
        let tokens = block(vec![labelled("travelTime libStatus4", "08:15")]);
        let (result, _) = run(tokens);
        match result {
            Err(ClassifyError::InternalState(err)) => {
                assert_eq!(err.label, DirectionalLabel::TimeOfDay);
                assert_eq!(err.context, Context::None);
            }
            other => panic!("expected internal state error, got {other:?}"),
        }
    }

    #[test]
    fn station_inside_placement_is_fatal() {
        let tokens = block(vec![
            vec![open("div", "departure")],
            vec![open("div", "placementInfo")],
            labelled("travelStation", "Paris"),
            vec![close("div"), close("div")],
        ]);
        let (result, _) = run(tokens);
        assert!(matches!(result, Err(ClassifyError::InternalState(_))));
    }

    #[test]
    fn empty_block() {
        let (result, _) = run(vec![close("div")]);
        assert_eq!(result.unwrap(), TravelRecord::new());
    }

    #[test]
    fn block_closed_by_span() {
        // Depth counts div and span alike.
        let (result, _) = run(vec![close("span")]);
        assert!(result.is_ok());
    }
}
