use super::*;

fn product(name: &str, category: &str) -> Product {
    Product { name: name.to_owned(), category: category.to_owned(), ..Product::default() }
}

#[test]
fn blank_query_keeps_everything() {
    let all = vec![product("A2 Milk", "Dairy"), product("Ghee", "Dairy")];
    assert_eq!(filter_products(&all, "  ").len(), 2);
}

#[test]
fn query_matches_name_or_category_case_insensitively() {
    let all = vec![product("A2 Milk", "Dairy"), product("Dung Cakes", "Fuel"), product("Vermicompost", "Fertilizer")];
    let names = |q: &str| filter_products(&all, q).into_iter().map(|p| p.name).collect::<Vec<_>>();
    assert_eq!(names("milk"), vec!["A2 Milk"]);
    assert_eq!(names("FUEL"), vec!["Dung Cakes"]);
    assert!(names("paneer").is_empty());
}

#[test]
fn listing_path_follows_area_naming() {
    assert_eq!(listing_path("/buyer"), "/buyer/item-list");
    assert_eq!(listing_path("/farmer"), "/farmer/products");
}
