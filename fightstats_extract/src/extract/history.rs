//! Fight-history table extraction.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::dom::{body_rows, first_tbody_in};
use crate::types::FightRow;

static FIGHT_HISTORY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class*="fight-history"]"#).expect("fight history selector")
});

/// Rows of the fight-history table, or an empty vector when the page has
/// no such table.
pub fn fight_history(doc: &Html) -> Vec<FightRow> {
    let Some(container) = doc.select(&FIGHT_HISTORY).next() else {
        return Vec::new();
    };
    let Some(tbody) = first_tbody_in(container) else {
        return Vec::new();
    };
    body_rows(tbody)
        .iter()
        .map(|cells| FightRow::from_cells(cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY_PAGE: &str = r##"
<html><body>
<div class="ResponsiveTable fight-history">
  <div class="Table__Title">Fight History</div>
  <table><tbody>
    <tr><td>Nov 11, 2023</td><td><a href="/o">Stipe Miocic</a></td><td><a href="/e">UFC 295</a></td><td><div>W</div></td><td><div>TKO</div></td><td><div>1</div></td><td><div>4:29</div></td></tr>
    <tr><td>Mar 4, 2023</td><td><a href="/o">Ciryl Gane</a></td><td><a href="/e">UFC 285</a></td><td><div>W</div></td><td><div>Submission</div></td><td><div>1</div></td><td><div>2:04</div></td></tr>
  </tbody></table>
</div>
</body></html>
"##;

    #[test]
    fn extracts_seven_column_rows() {
        let doc = Html::parse_document(HISTORY_PAGE);
        let fights = fight_history(&doc);
        assert_eq!(fights.len(), 2);
        assert_eq!(fights[0].date, "Nov 11, 2023");
        assert_eq!(fights[0].opponent, "Stipe Miocic");
        assert_eq!(fights[0].event, "UFC 295");
        assert_eq!(fights[0].result, "W");
        assert_eq!(fights[0].decision, "TKO");
        assert_eq!(fights[0].rnd, "1");
        assert_eq!(fights[0].time, "4:29");
        assert_eq!(fights[1].decision, "Submission");
    }

    #[test]
    fn extraction_is_deterministic() {
        let first = fight_history(&Html::parse_document(HISTORY_PAGE));
        let second = fight_history(&Html::parse_document(HISTORY_PAGE));
        assert_eq!(first, second);
    }

    #[test]
    fn page_without_history_table_yields_no_rows() {
        let doc = Html::parse_document("<html><body><table><tbody><tr><td>x</td></tr></tbody></table></body></html>");
        assert!(fight_history(&doc).is_empty());
    }

    #[test]
    fn short_rows_degrade_to_empty_fields() {
        let doc = Html::parse_document(
            r#"<div class="fight-history"><table><tbody>
               <tr><td>Jan 1, 2020</td><td><a href="/o">Foe</a></td></tr>
               </tbody></table></div>"#,
        );
        let fights = fight_history(&doc);
        assert_eq!(fights.len(), 1);
        assert_eq!(fights[0].date, "Jan 1, 2020");
        assert_eq!(fights[0].opponent, "Foe");
        assert_eq!(fights[0].result, "");
        assert_eq!(fights[0].time, "");
    }
}
