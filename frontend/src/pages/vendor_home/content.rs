#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopularProduct {
    pub name: &'static str,
    pub description: &'static str,
}

pub const OFFERS: &[Offer] = &[
    Offer {
        title: "10% Off on First Order!",
        description: "Get 10% off when you place your first order today.",
    },
    Offer {
        title: "Free Delivery",
        description: "Enjoy free delivery on orders above ₹500.",
    },
];

pub const POPULAR_PRODUCTS: &[PopularProduct] = &[
    PopularProduct {
        name: "Fresh Tomatoes",
        description: "Best quality tomatoes from local farms.",
    },
    PopularProduct {
        name: "Paneer",
        description: "Soft and fresh paneer for your recipes.",
    },
    PopularProduct {
        name: "Masala Mix",
        description: "Spicy masala mix for street food.",
    },
];

pub const SUPPORT_EMAIL: &str = "support@streetfoodhub.com";
pub const BRAND_NAME: &str = "Street Food Hub";
pub const BROWSE_PRODUCTS_PATH: &str = "/vendor/dashboard";
pub const VIEW_ORDERS_PATH: &str = "/vendor/orders";
