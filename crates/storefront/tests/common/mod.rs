use storefront_catalog::{Corpus, Item};

#[allow(dead_code)]
pub fn scenario_corpus() -> Corpus {
    Corpus::new(vec![
        Item::new("A", "red shoe leather"),
        Item::new("B", "red shoe canvas"),
        Item::new("C", "blue hat wool"),
        Item::new("D", "red shoe leather"),
    ])
}

/// Deterministic catalog with overlapping tags and repeated tag strings
#[allow(dead_code)]
pub fn generated_corpus(size: usize) -> Corpus {
    let colors = ["red", "blue", "green", "black"];
    let kinds = ["shoe", "hat", "scarf", "bag", "glove"];
    let materials = ["leather", "wool", "canvas"];
    (0..size)
        .map(|i| {
            let tags = format!(
                "{} {} {}",
                colors[i % colors.len()],
                kinds[(i / 2) % kinds.len()],
                materials[(i / 3) % materials.len()]
            );
            Item::new(format!("item{i}"), tags)
        })
        .collect()
}

#[allow(dead_code)]
pub const CATALOG_CSV: &str = "\
ProdID,Rating,ReviewCount,Brand,Name,ImageURL,Tags
1,4.5,120,Acme,Ruby Matte Lipstick,https://img/1.png,red matte lipstick long lasting
2,4.0,80,Acme,Crimson Gloss Lipstick,https://img/2.png,red gloss lipstick shine
3,3.5,15,Sudso,Herbal Shampoo,https://img/3.png,herbal shampoo hair care
4,4.8,300,Sudso,Argan Conditioner,https://img/4.png,argan conditioner hair care
5,,,,Plain Soap,,
";
