//! # Seed Data
//!
//! The sample catalog and the default user list loaded at startup.
//!
//! ## Sample Catalog
//! ```text
//! id  name                 category          price   off
//! ──  ───────────────────  ────────────────  ──────  ───
//!  1  Pão Francês          Pães              0.50    30%
//!  2  Bolo de Chocolate    Bolos             25.00   40%
//!  3  Croissant            Pães Especiais    5.00    25%
//!  4  Pão de Queijo        Salgados          2.50    20%
//!  5  Torta de Frango      Salgados          8.00    10%
//!  6  Sonho                Doces             3.50    15%
//!  7  Baguete              Pães              4.00    20%
//!  8  Bolo de Cenoura      Bolos             22.00   35%
//!  9  Coxinha              Salgados          3.50    30%
//! 10  Pão de Mel           Doces             6.00    25%
//! ```

use chrono::NaiveDate;
use padaria_core::{Product, User};

/// Username of the seeded administrator.
pub const ADMIN_USERNAME: &str = "admin";

/// The one password sign-in accepts (for `ADMIN_USERNAME`).
pub const ADMIN_PASSWORD: &str = "senha123";

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    expires: (i32, u32, u32),
    discount: u32,
    image_url: &'static str,
    category: &'static str,
    quantity: i64,
}

const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        id: "1",
        name: "Pão Francês",
        description: "Pão francês tradicional e crocante, feito com farinha de trigo especial",
        price_cents: 50,
        expires: (2024, 3, 25),
        discount: 30,
        image_url: "https://img.freepik.com/fotos-gratis/pao-frances-fresco-isolado_219193-3575.jpg",
        category: "Pães",
        quantity: 50,
    },
    SeedProduct {
        id: "2",
        name: "Bolo de Chocolate",
        description: "Bolo de chocolate com cobertura de ganache e raspas de chocolate",
        price_cents: 2500,
        expires: (2024, 3, 24),
        discount: 40,
        image_url: "https://img.freepik.com/fotos-gratis/bolo-de-chocolate-com-cobertura-de-chocolate_140725-2720.jpg",
        category: "Bolos",
        quantity: 10,
    },
    SeedProduct {
        id: "3",
        name: "Croissant",
        description: "Croissant folhado tradicional com manteiga francesa",
        price_cents: 500,
        expires: (2024, 3, 24),
        discount: 25,
        image_url: "https://img.freepik.com/fotos-gratis/croissant-fresco-isolado_219193-3574.jpg",
        category: "Pães Especiais",
        quantity: 15,
    },
    SeedProduct {
        id: "4",
        name: "Pão de Queijo",
        description: "Pão de queijo mineiro tradicional, feito com queijo canastra",
        price_cents: 250,
        expires: (2024, 3, 23),
        discount: 20,
        image_url: "https://img.freepik.com/fotos-gratis/pao-de-queijo-fresco-isolado_219193-3576.jpg",
        category: "Salgados",
        quantity: 30,
    },
    SeedProduct {
        id: "5",
        name: "Torta de Frango",
        description: "Torta de frango com massa folhada e recheio cremoso",
        price_cents: 800,
        expires: (2024, 3, 23),
        discount: 10,
        image_url: "https://img.freepik.com/fotos-gratis/torta-de-frango-isolada_219193-3578.jpg",
        category: "Salgados",
        quantity: 12,
    },
    SeedProduct {
        id: "6",
        name: "Sonho",
        description: "Sonho recheado com creme de baunilha e cobertura de chocolate",
        price_cents: 350,
        expires: (2024, 3, 23),
        discount: 15,
        image_url: "https://img.freepik.com/fotos-gratis/sonho-doce-isolado_219193-3577.jpg",
        category: "Doces",
        quantity: 20,
    },
    SeedProduct {
        id: "7",
        name: "Baguete",
        description: "Baguete francesa tradicional, crocante por fora e macia por dentro",
        price_cents: 400,
        expires: (2024, 3, 24),
        discount: 20,
        image_url: "https://img.freepik.com/fotos-gratis/baguete-francesa-isolada_219193-3579.jpg",
        category: "Pães",
        quantity: 25,
    },
    SeedProduct {
        id: "8",
        name: "Bolo de Cenoura",
        description: "Bolo de cenoura com cobertura de chocolate",
        price_cents: 2200,
        expires: (2024, 3, 24),
        discount: 35,
        image_url: "https://img.freepik.com/fotos-gratis/bolo-de-cenoura-com-cobertura-de-chocolate_140725-2721.jpg",
        category: "Bolos",
        quantity: 8,
    },
    SeedProduct {
        id: "9",
        name: "Coxinha",
        description: "Coxinha de frango com catupiry",
        price_cents: 350,
        expires: (2024, 3, 23),
        discount: 30,
        image_url: "https://via.placeholder.com/300x200?text=Coxinha",
        category: "Salgados",
        quantity: 40,
    },
    SeedProduct {
        id: "10",
        name: "Pão de Mel",
        description: "Pão de mel tradicional com cobertura de chocolate",
        price_cents: 600,
        expires: (2024, 3, 25),
        discount: 25,
        image_url: "https://via.placeholder.com/300x200?text=Pão+Mel",
        category: "Doces",
        quantity: 20,
    },
];

impl SeedProduct {
    fn to_product(&self) -> Product {
        let (y, m, d) = self.expires;
        Product {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price_cents: self.price_cents,
            expiration_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            discount_percentage: self.discount,
            image_url: self.image_url.to_string(),
            category: self.category.to_string(),
            quantity: self.quantity,
        }
    }
}

/// The 10-item sample catalog, in shelf order.
pub fn sample_catalog() -> Vec<Product> {
    CATALOG.iter().map(SeedProduct::to_product).collect()
}

/// The seeded administrator.
pub fn admin_user() -> User {
    User {
        id: "1".to_string(),
        name: "Admin".to_string(),
        phone: "11999999999".to_string(),
        email: "admin@example.com".to_string(),
        username: ADMIN_USERNAME.to_string(),
        is_admin: true,
    }
}

/// Users present at startup.
pub fn default_users() -> Vec<User> {
    vec![admin_user()]
}
