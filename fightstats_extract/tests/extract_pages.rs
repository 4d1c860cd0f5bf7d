use fightstats_extract::{extract_page, UrlFilter};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

const STATS_URL: &str = "https://www.espn.com/mma/fighter/stats/_/id/2335639/jon-jones";
const HISTORY_URL: &str = "https://www.espn.com/mma/fighter/history/_/id/2335639/jon-jones";

#[test]
fn stats_page_extracts_bio_and_all_three_stat_tables() {
    let body = load_fixture("stats_page.html");
    let page = extract_page(STATS_URL, &body, &UrlFilter::default()).expect("stats page extracts");

    assert_eq!(page.key, "Jon Jones");

    let record = &page.record;
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

    assert_eq!(record.striking_stats.len(), 2);
    assert_eq!(record.striking_stats[0].opponent, "Stipe Miocic");
    assert_eq!(record.striking_stats[0].sdbl_a, "12/24");
    assert_eq!(record.striking_stats[0].percent_leg, "15%");
    assert_eq!(record.striking_stats[1].event, "UFC 285");

    assert_eq!(record.clinch_stats.len(), 1);
    assert_eq!(record.clinch_stats[0].scbl, "2");
    assert_eq!(record.clinch_stats[0].tk_acc, "67%");

    assert_eq!(record.ground_stats.len(), 1);
    assert_eq!(record.ground_stats[0].sgbl, "14");
    assert_eq!(record.ground_stats[0].sm, "1");

    assert!(record.fights.is_empty());
}

#[test]
fn history_page_extracts_fight_rows_keyed_by_url_slug() {
    let body = load_fixture("history_page.html");
    let page =
        extract_page(HISTORY_URL, &body, &UrlFilter::default()).expect("history page extracts");

    assert_eq!(page.key, "Jon Jones");
    assert_eq!(page.record.fights.len(), 3);
    assert_eq!(page.record.fights[2].opponent, "Dominick Reyes");
    assert_eq!(page.record.fights[2].decision, "Decision - Unanimous");
    assert_eq!(page.record.fights[2].rnd, "5");

    // History pages carry no bio header tables.
    assert!(page.record.striking_stats.is_empty());
    assert_eq!(page.record.first_name, "");
}

#[test]
fn extraction_is_deterministic_across_parses() {
    let body = load_fixture("stats_page.html");
    let filter = UrlFilter::default();
    let first = extract_page(STATS_URL, &body, &filter).unwrap();
    let second = extract_page(STATS_URL, &body, &filter).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_vec(&first.record).unwrap();
    let second_json = serde_json::to_vec(&second.record).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn schedule_urls_are_never_extracted() {
    let body = load_fixture("history_page.html");
    let url = "https://www.espn.com/mma/fighter/schedule/_/id/2335639/jon-jones";
    assert!(extract_page(url, &body, &UrlFilter::default()).is_none());
}
