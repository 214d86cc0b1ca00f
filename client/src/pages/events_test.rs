use super::*;

fn event(title: &str, date: &str) -> Event {
    Event { title: title.to_owned(), date: date.to_owned(), ..Event::default() }
}

#[test]
fn by_date_orders_earliest_first() {
    let sorted = by_date(vec![event("fair", "2025-03-10"), event("camp", "2025-01-05"), event("expo", "2025-02-01")]);
    let titles: Vec<_> = sorted.into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["camp", "expo", "fair"]);
}

#[test]
fn by_date_puts_undated_events_last() {
    let sorted = by_date(vec![event("tbd", ""), event("camp", "2025-01-05")]);
    assert_eq!(sorted[0].title, "camp");
    assert_eq!(sorted[1].title, "tbd");
}
