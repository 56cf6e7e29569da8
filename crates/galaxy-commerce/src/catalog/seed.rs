//! Seed data for the initial catalog snapshot.

use crate::catalog::{Catalog, Product, ProductSpecs};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Deserialize;

/// On-disk seed file layout.
///
/// TOML seeds use `[[products]]` tables; JSON seeds may be either this
/// object or a bare array of products.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

/// A product record in a seed file.
///
/// Same shape as [`Product`], except that a bare `price` number is read in
/// the currency of the catalog being seeded.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedProduct {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: SeedPrice,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub specs: ProductSpecs,
}

/// A seed price: a bare amount or an explicit `{ amount, currency }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeedPrice {
    Amount(i64),
    Priced(Money),
}

impl SeedPrice {
    /// Resolve against the catalog currency.
    pub fn in_currency(self, currency: Currency) -> Money {
        match self {
            SeedPrice::Amount(amount) => Money::new(amount, currency),
            SeedPrice::Priced(money) => money,
        }
    }
}

impl SeedProduct {
    pub fn into_product(self, currency: Currency) -> Product {
        Product {
            id: self.id,
            name: self.name,
            brand: self.brand,
            price: self.price.in_currency(currency),
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            specs: self.specs,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSeed {
    List(Vec<SeedProduct>),
    File(SeedFile),
}

impl Catalog {
    /// Build a catalog from a TOML seed document.
    pub fn from_toml_str(currency: Currency, content: &str) -> Result<Self, CommerceError> {
        let seed: SeedFile = toml::from_str(content)?;
        Catalog::from_seed(currency, seed.products)
    }

    /// Build a catalog from a JSON seed document.
    pub fn from_json_str(currency: Currency, content: &str) -> Result<Self, CommerceError> {
        let products = match serde_json::from_str::<JsonSeed>(content)? {
            JsonSeed::List(products) => products,
            JsonSeed::File(seed) => seed.products,
        };
        Catalog::from_seed(currency, products)
    }

    fn from_seed(currency: Currency, products: Vec<SeedProduct>) -> Result<Self, CommerceError> {
        let products = products
            .into_iter()
            .map(|p| p.into_product(currency))
            .collect();
        Catalog::from_products(currency, products)
    }

    /// The built-in TechGalaxy catalog.
    pub fn builtin() -> Self {
        Self::from_products(Currency::VND, builtin_products()).unwrap_or_default()
    }

    /// The built-in catalog for a store priced in `currency`.
    ///
    /// The built-in products are priced in dong, so any other currency needs
    /// a seed file.
    pub fn builtin_for(currency: Currency) -> Result<Self, CommerceError> {
        Self::from_products(currency, builtin_products())
    }
}

/// The built-in TechGalaxy product collection.
pub fn builtin_products() -> Vec<Product> {
    vec![
        laptop(
            1,
            "MacBook Air M3",
            "Apple",
            27_990_000,
            "Thin and silent laptop with all-day battery life.",
            ["Apple M3 8-core", "16GB", "512GB SSD", "13.6\" Liquid Retina", "10-core GPU"],
        ),
        laptop(
            2,
            "ROG Zephyrus G14",
            "ASUS",
            45_990_000,
            "Compact 14-inch gaming laptop with an OLED panel.",
            ["AMD Ryzen 9 8945HS", "32GB", "1TB SSD", "14\" 3K OLED 120Hz", "RTX 4070 8GB"],
        ),
        laptop(
            3,
            "Dell XPS 13",
            "Dell",
            32_490_000,
            "Premium ultrabook with an edge-to-edge InfinityEdge display.",
            ["Intel Core Ultra 7 155H", "16GB", "512GB SSD", "13.4\" FHD+", "Intel Arc"],
        ),
        laptop(
            4,
            "Aspire 7",
            "Acer",
            17_490_000,
            "Affordable all-rounder for study and light gaming.",
            ["Intel Core i5-12450H", "16GB", "512GB SSD", "15.6\" FHD 144Hz", "RTX 3050 4GB"],
        ),
        laptop(
            5,
            "Legion Pro 7",
            "Lenovo",
            62_990_000,
            "Flagship gaming laptop with a vapor chamber cooler.",
            ["Intel Core i9-14900HX", "32GB", "2TB SSD", "16\" WQXGA 240Hz", "RTX 4080 12GB"],
        ),
        device(
            6,
            "iPhone 15 Pro",
            "Apple",
            28_990_000,
            "Smartphone",
            "Titanium design with the A17 Pro chip.",
            ["A17 Pro", "8GB", "256GB", "6.1\" Super Retina XDR", "6-core GPU"],
        ),
        device(
            7,
            "Galaxy S24 Ultra",
            "Samsung",
            33_990_000,
            "Smartphone",
            "Built-in S Pen and a 200MP camera.",
            ["Snapdragon 8 Gen 3", "12GB", "512GB", "6.8\" QHD+ AMOLED", "Adreno 750"],
        ),
        device(
            8,
            "iPad Air M2",
            "Apple",
            16_990_000,
            "Tablet",
            "Light tablet with Apple Pencil Pro support.",
            ["Apple M2", "8GB", "128GB", "11\" Liquid Retina", "10-core GPU"],
        ),
        device(
            9,
            "Galaxy Tab S9",
            "Samsung",
            19_990_000,
            "Tablet",
            "Water-resistant tablet with a Dynamic AMOLED 2X screen.",
            ["Snapdragon 8 Gen 2", "8GB", "128GB", "11\" Dynamic AMOLED 2X", "Adreno 740"],
        ),
    ]
}

fn laptop(id: u64, name: &str, brand: &str, price: i64, description: &str, specs: [&str; 5]) -> Product {
    device(id, name, brand, price, "Laptop", description, specs)
}

fn device(
    id: u64,
    name: &str,
    brand: &str,
    price: i64,
    category: &str,
    description: &str,
    [cpu, ram, storage, display, gpu]: [&str; 5],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        brand: brand.to_string(),
        price: Money::vnd(price),
        description: description.to_string(),
        image_url: format!("/images/products/{}.jpg", id),
        category: category.to_string(),
        specs: ProductSpecs {
            cpu: cpu.to_string(),
            ram: ram.to_string(),
            storage: storage.to_string(),
            display: display.to_string(),
            gpu: gpu.to_string(),
        },
    }
}
