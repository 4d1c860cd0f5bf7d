//! Fighter biography extraction from the player header region.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::dom::{leaf_texts, nested_text, next_sibling_element, own_text};
use crate::identity;
use crate::types::FighterRecord;

static HEADER_MAIN: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class*="PlayerHeader__Main"]"#).expect("header selector")
});
static BIO_LIST: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"ul[class*="PlayerHeader__Bio_List"]"#).expect("bio list selector")
});
static HEADER_RIGHT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class*="PlayerHeader__Right"]"#).expect("header right selector")
});
static BIO_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("bio item selector"));
static RECORD_LABEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[aria-label]").expect("record label selector"));

/// Fills `record` with whatever the page header carries: name spans, bio
/// list items, and the three win/loss record blocks. Absent regions leave
/// their fields untouched.
pub fn extract_bio(doc: &Html, record: &mut FighterRecord) {
    if let Some(header) = doc.select(&HEADER_MAIN).next() {
        extract_name(header, record);
    }
    if let Some(list) = doc.select(&BIO_LIST).next() {
        extract_bio_list(list, record);
    }
    if let Some(right) = doc.select(&HEADER_RIGHT).next() {
        extract_records(right, record);
    }
}

/// The first two text-bearing leaves of the header are the name spans;
/// anything after them is ignored.
fn extract_name(header: ElementRef<'_>, record: &mut FighterRecord) {
    let mut texts = leaf_texts(header);
    if let Some(first) = texts.next() {
        record.first_name = identity::normalize(&first);
    }
    if let Some(last) = texts.next() {
        record.last_name = identity::normalize(&last);
    }
}

/// Bio list items lead with a label div; the value sits in the label's
/// next sibling, nested one container down. Unrecognized labels are
/// skipped.
fn extract_bio_list(list: ElementRef<'_>, record: &mut FighterRecord) {
    for item in list.select(&BIO_ITEM) {
        let Some(label) = item.children().find_map(ElementRef::wrap) else {
            continue;
        };
        let Some(value_el) = next_sibling_element(label) else {
            continue;
        };
        let value = nested_text(value_el);
        match own_text(label).as_str() {
            "HT/WT" => record.height_and_weight = value,
            "Birthdate" => record.birthdate = value,
            "Team" => record.team = value,
            "Nickname" => record.nickname = value,
            "Stance" => record.stance = value,
            _ => {}
        }
    }
}

/// Win/loss blocks are tagged through their accessibility label; the
/// displayed value is the label's next sibling element.
fn extract_records(right: ElementRef<'_>, record: &mut FighterRecord) {
    for labeled in right.select(&RECORD_LABEL) {
        let Some(value_el) = next_sibling_element(labeled) else {
            continue;
        };
        let value = own_text(value_el);
        match labeled.value().attr("aria-label") {
            Some("Wins-Losses-Draws") => record.win_loss_record = value,
            Some("Technical Knockout-Technical Knockout Losses") => record.tko_record = value,
            Some("Submissions-Submission Losses") => record.sub_record = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_PAGE: &str = r##"
<html><body>
<div class="PlayerHeader__Main flex">
  <h1 class="PlayerHeader__Name"><span class="truncate">Jon</span><span class="truncate">Jones</span></h1>
</div>
<ul class="PlayerHeader__Bio_List list">
  <li><div>HT/WT</div><div><div>6' 4", 205 lbs</div></div></li>
  <li><div>Birthdate</div><div><div>7/19/1987</div></div></li>
  <li><div>Team</div><div><div>Jackson-Wink MMA</div></div></li>
  <li><div>Nickname</div><div><div>Bones</div></div></li>
  <li><div>Stance</div><div><div>Orthodox</div></div></li>
  <li><div>Reach</div><div><div>84.5"</div></div></li>
</ul>
<div class="PlayerHeader__Right">
  <div><div aria-label="Wins-Losses-Draws">W-L-D</div><div>27-1-0</div></div>
  <div><div aria-label="Technical Knockout-Technical Knockout Losses">(T)KO</div><div>10-0</div></div>
  <div><div aria-label="Submissions-Submission Losses">SUB</div><div>7-0</div></div>
</div>
</body></html>
"##;

    #[test]
    fn extracts_name_bio_and_records() {
        let doc = Html::parse_document(HEADER_PAGE);
        let mut record = FighterRecord::default();
        extract_bio(&doc, &mut record);

        assert_eq!(record.first_name, "Jon");
        assert_eq!(record.last_name, "Jones");
        assert_eq!(record.height_and_weight, "6' 4\", 205 lbs");
        assert_eq!(record.birthdate, "7/19/1987");
        assert_eq!(record.team, "Jackson-Wink MMA");
        assert_eq!(record.nickname, "Bones");
        assert_eq!(record.stance, "Orthodox");
        assert_eq!(record.win_loss_record, "27-1-0");
        assert_eq!(record.tko_record, "10-0");
        assert_eq!(record.sub_record, "7-0");
    }

    #[test]
    fn name_spans_are_normalized() {
        let doc = Html::parse_document(
            r#"<div class="PlayerHeader__Main"><h1><span>JON</span><span>JONES</span></h1></div>"#,
        );
        let mut record = FighterRecord::default();
        extract_bio(&doc, &mut record);
        assert_eq!(record.first_name, "Jon");
        assert_eq!(record.last_name, "Jones");
    }

    #[test]
    fn missing_header_leaves_record_untouched() {
        let doc = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        let mut record = FighterRecord::default();
        extract_bio(&doc, &mut record);
        assert_eq!(record, FighterRecord::default());
    }

    #[test]
    fn unrecognized_bio_labels_are_skipped() {
        let doc = Html::parse_document(
            r#"<ul class="PlayerHeader__Bio_List">
               <li><div>Country</div><div><div>USA</div></div></li>
               <li><div>Stance</div><div><div>Southpaw</div></div></li>
               </ul>"#,
        );
        let mut record = FighterRecord::default();
        extract_bio(&doc, &mut record);
        assert_eq!(record.stance, "Southpaw");
        assert_eq!(record.team, "");
    }
}
