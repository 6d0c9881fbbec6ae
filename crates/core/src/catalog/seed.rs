//! Built-in product catalog.

use rust_decimal::Decimal;

use crate::product::Product;
use crate::types::ProductId;

const APPAREL_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];
const WAIST_SIZES: &[&str] = &["28", "30", "32", "34", "36", "38", "40"];

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    /// Image file stem under `/images/products/`.
    image: &'static str,
    stock: u32,
    category: &'static str,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    rating: f64,
    tags: &'static [&'static str],
    is_new: bool,
    is_sale: bool,
}

impl SeedProduct {
    fn into_product(self) -> Product {
        let image_url = format!("/images/products/{}.jpg", self.image);
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            price: Decimal::new(self.price, 0),
            original_price: None,
            images: vec![image_url.clone()],
            image_url,
            stock: self.stock,
            category: self.category.to_string(),
            tags: to_strings(self.tags),
            sizes: to_strings(self.sizes),
            colors: to_strings(self.colors),
            is_new: self.is_new,
            is_sale: self.is_sale,
            rating: self.rating,
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

const SEED: [SeedProduct; 16] = [
    SeedProduct {
        id: "1",
        name: "Classic Cropped Tee",
        description: "Premium 100% cotton t-shirt with perfect fit and comfort",
        price: 399,
        image: "Classsic Cropped Tee",
        stock: 45,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Black", "White", "Navy", "Gray"],
        rating: 4.6,
        tags: &["classic", "casual", "cotton"],
        is_new: true,
        is_sale: false,
    },
    SeedProduct {
        id: "2",
        name: "Minimal Logo Tshirt",
        description: "Sleek minimalist design with subtle logo embroidery",
        price: 449,
        image: "Minimal Logo Tshirt",
        stock: 50,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Black", "White", "Heather Gray"],
        rating: 4.7,
        tags: &["minimal", "modern", "casual"],
        is_new: true,
        is_sale: false,
    },
    SeedProduct {
        id: "3",
        name: "Oversized Street Tee",
        description: "Trendy oversized fit perfect for street style fashion",
        price: 499,
        image: "Oversized Street Tee",
        stock: 40,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Black", "White", "Olive", "Cream"],
        rating: 4.5,
        tags: &["oversized", "street", "trendy"],
        is_new: true,
        is_sale: true,
    },
    SeedProduct {
        id: "4",
        name: "Vintage Washed Tshirt",
        description: "Classic vintage wash effect for that retro cool look",
        price: 529,
        image: "Vintage Washed Tshirt",
        stock: 35,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Vintage Black", "Vintage White", "Vintage Gray"],
        rating: 4.8,
        tags: &["vintage", "casual", "retro"],
        is_new: false,
        is_sale: false,
    },
    SeedProduct {
        id: "5",
        name: "Premium Basic Tee",
        description: "High-quality essentials basic tee for everyday wear",
        price: 599,
        image: "Premium Basic Tee",
        stock: 60,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Black", "White", "Navy", "Burgundy"],
        rating: 4.9,
        tags: &["premium", "basic", "essential"],
        is_new: false,
        is_sale: false,
    },
    SeedProduct {
        id: "6",
        name: "Graphic Print Tshirt",
        description: "Bold and vibrant graphic designs for statement looks",
        price: 549,
        image: "Graphic Print Tshirt",
        stock: 38,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Black", "White", "Gray"],
        rating: 4.6,
        tags: &["graphic", "print", "bold"],
        is_new: true,
        is_sale: false,
    },
    SeedProduct {
        id: "7",
        name: "Relaxed Fit Pocket Tee",
        description: "Comfortable relaxed fit with functional chest pocket",
        price: 469,
        image: "Relaxed Fit Pocket Tee",
        stock: 42,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Khaki", "Navy", "Cream", "Forest Green"],
        rating: 4.5,
        tags: &["relaxed", "pocket", "casual"],
        is_new: true,
        is_sale: false,
    },
    SeedProduct {
        id: "8",
        name: "Athletic Performance Tee",
        description: "Moisture-wicking performance fabric for active lifestyle",
        price: 579,
        image: "Athletic Performance Tee",
        stock: 48,
        category: "T-Shirts",
        sizes: APPAREL_SIZES,
        colors: &["Black", "White", "Sport Blue", "Electric Lime"],
        rating: 4.8,
        tags: &["athletic", "performance", "sports"],
        is_new: true,
        is_sale: true,
    },
    SeedProduct {
        id: "9",
        name: "Slim Fit Denim Jeans",
        description: "Classic slim fit denim with perfect ankle taper",
        price: 999,
        image: "Slim Fit Denim Jeans",
        stock: 32,
        category: "Pants",
        sizes: WAIST_SIZES,
        colors: &["Dark Blue", "Light Blue", "Black"],
        rating: 4.7,
        tags: &["denim", "slim", "jeans"],
        is_new: false,
        is_sale: false,
    },
    SeedProduct {
        id: "10",
        name: "Straight Cut Jeans",
        description: "Versatile straight cut jeans for all-day comfort",
        price: 1049,
        image: "Straight Cut Jeans",
        stock: 40,
        category: "Pants",
        sizes: WAIST_SIZES,
        colors: &["Indigo", "Medium Blue", "Black", "Gray"],
        rating: 4.8,
        tags: &["straight", "jeans", "classic"],
        is_new: false,
        is_sale: false,
    },
    SeedProduct {
        id: "11",
        name: "Cargo Utility Pants",
        description: "Multi-pocket cargo pants with functional utility design",
        price: 1199,
        image: "Cargo Utility Pants",
        stock: 28,
        category: "Pants",
        sizes: WAIST_SIZES,
        colors: &["Olive", "Black", "Khaki", "Navy"],
        rating: 4.6,
        tags: &["cargo", "utility", "tactical"],
        is_new: true,
        is_sale: false,
    },
    SeedProduct {
        id: "12",
        name: "Casual Chino Pants",
        description: "Timeless chino pants perfect for casual and smart-casual",
        price: 899,
        image: "Casual Chino Pants",
        stock: 50,
        category: "Pants",
        sizes: WAIST_SIZES,
        colors: &["Khaki", "Navy", "Gray", "Olive", "Burgundy"],
        rating: 4.8,
        tags: &["chino", "casual", "smart-casual"],
        is_new: false,
        is_sale: true,
    },
    SeedProduct {
        id: "13",
        name: "Jogger Sweatpants",
        description: "Comfortable jogger style sweatpants for relaxed wear",
        price: 799,
        image: "Jogger Sweatpants",
        stock: 55,
        category: "Pants",
        sizes: APPAREL_SIZES,
        colors: &["Black", "Gray", "Navy", "Charcoal"],
        rating: 4.7,
        tags: &["jogger", "sweatpants", "comfort"],
        is_new: true,
        is_sale: false,
    },
    SeedProduct {
        id: "14",
        name: "Relaxed Fit Trousers",
        description: "Loose and comfortable fit trousers for all-day wear",
        price: 1099,
        image: "Relaxed Fit Trousers",
        stock: 35,
        category: "Pants",
        sizes: WAIST_SIZES,
        colors: &["Black", "Charcoal", "Olive", "Navy"],
        rating: 4.6,
        tags: &["relaxed", "trousers", "comfort"],
        is_new: false,
        is_sale: false,
    },
    SeedProduct {
        id: "15",
        name: "Distressed Denim Jeans",
        description: "Trendy distressed denim with selective rips and tears",
        price: 1149,
        image: "Distressed Denim Jeans",
        stock: 30,
        category: "Pants",
        sizes: &["28", "30", "32", "34", "36", "38"],
        colors: &["Light Blue", "Medium Blue", "Black"],
        rating: 4.5,
        tags: &["distressed", "trendy", "jeans"],
        is_new: true,
        is_sale: true,
    },
    SeedProduct {
        id: "16",
        name: "Techwear Cargo Pants",
        description: "Modern techwear cargo pants with advanced fabric technology",
        price: 1299,
        image: "Techwear Cargo Pants",
        stock: 25,
        category: "Pants",
        sizes: WAIST_SIZES,
        colors: &["Black", "Dark Gray", "Olive Green"],
        rating: 4.9,
        tags: &["techwear", "cargo", "modern"],
        is_new: true,
        is_sale: false,
    },
];

/// The built-in product list, in catalog order.
#[must_use]
pub fn products() -> Vec<Product> {
    SEED.into_iter().map(SeedProduct::into_product).collect()
}
