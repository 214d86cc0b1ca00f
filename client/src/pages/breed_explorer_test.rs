use super::*;

fn rec(breed: &str, score: f64) -> Recommendation {
    Recommendation { breed: breed.to_owned(), milk_yield: 1800.0, score }
}

#[test]
fn strongest_partner_picks_highest_score() {
    let list = vec![rec("Sahiwal", 8.4), rec("Gir", 9.2), rec("Rathi", 7.9)];
    assert_eq!(strongest_partner(&list).map(|r| r.breed.as_str()), Some("Gir"));
}

#[test]
fn strongest_partner_of_empty_list_is_none() {
    assert!(strongest_partner(&[]).is_none());
}
