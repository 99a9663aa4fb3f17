//! The built-in sample catalog.

use shopfront_catalog::catalog::Product;
use shopfront_catalog::{Currency, Money, ProductId};

const IMAGE_QUERY: &str = "auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// The twelve-item sample catalog, priced in `currency`.
///
/// Ids run 1 through 12 in catalog order.
pub fn sample_products(currency: Currency) -> Vec<Product> {
    let item = |id: u32,
                name: &str,
                description: &str,
                price: f64,
                discount: u8,
                category: &str,
                photo: u32,
                rating: f64,
                in_stock: bool| {
        Product::new(
            ProductId::new(id),
            name,
            Money::from_decimal(price, currency),
            category,
        )
        .with_description(description)
        .with_discount(discount)
        .with_image(format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?{IMAGE_QUERY}"
        ))
        .with_rating(rating)
        .with_stock(in_stock)
    };

    vec![
        item(
            1,
            "Premium Wireless Headphones",
            "Experience crystal-clear sound with our premium wireless headphones. Features noise cancellation and 30-hour battery life.",
            249.99,
            15,
            "electronics",
            3394650,
            4.8,
            true,
        ),
        item(
            2,
            "Ergonomic Office Chair",
            "Work in comfort with this ergonomic office chair. Adjustable height, lumbar support, and breathable mesh back.",
            199.99,
            0,
            "furniture",
            1957478,
            4.5,
            true,
        ),
        item(
            3,
            "Smart Fitness Watch",
            "Track your fitness goals with this advanced smartwatch. Features heart rate monitoring, GPS, and water resistance.",
            179.99,
            10,
            "electronics",
            437037,
            4.6,
            true,
        ),
        item(
            4,
            "Organic Cotton T-Shirt",
            "Stay comfortable with this 100% organic cotton t-shirt. Eco-friendly, soft, and available in multiple colors.",
            29.99,
            0,
            "clothing",
            5698851,
            4.3,
            true,
        ),
        item(
            5,
            "Professional DSLR Camera",
            "Capture stunning photos with this professional DSLR camera. 24.1 megapixels, 4K video recording, and interchangeable lenses.",
            899.99,
            5,
            "electronics",
            90946,
            4.9,
            false,
        ),
        item(
            6,
            "Stainless Steel Water Bottle",
            "Stay hydrated with this insulated stainless steel water bottle. Keeps drinks cold for 24 hours or hot for 12 hours.",
            34.99,
            0,
            "kitchen",
            1188649,
            4.7,
            true,
        ),
        item(
            7,
            "Leather Messenger Bag",
            "Carry your essentials in style with this genuine leather messenger bag. Multiple compartments and adjustable strap.",
            149.99,
            20,
            "accessories",
            2081199,
            4.4,
            true,
        ),
        item(
            8,
            "Smart Home Speaker",
            "Transform your home with this smart speaker. Voice control, premium sound quality, and smart home integration.",
            129.99,
            15,
            "electronics",
            6039243,
            4.5,
            true,
        ),
        item(
            9,
            "Ceramic Coffee Mug Set",
            "Enjoy your morning coffee with this set of 4 ceramic mugs. Microwave and dishwasher safe.",
            39.99,
            0,
            "kitchen",
            1566308,
            4.2,
            true,
        ),
        item(
            10,
            "Yoga Mat",
            "Practice yoga comfortably with this non-slip, eco-friendly yoga mat. 6mm thickness for joint protection.",
            49.99,
            10,
            "fitness",
            4056535,
            4.6,
            true,
        ),
        item(
            11,
            "Mechanical Keyboard",
            "Enhance your typing experience with this mechanical keyboard. Customizable RGB lighting and tactile key switches.",
            89.99,
            0,
            "electronics",
            1772123,
            4.7,
            true,
        ),
        item(
            12,
            "Scented Candle Set",
            "Create a relaxing atmosphere with this set of 3 scented candles. Made with natural soy wax and essential oils.",
            24.99,
            0,
            "home",
            4195499,
            4.4,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::catalog::distinct_categories;

    #[test]
    fn test_sample_catalog_is_valid() {
        let products = sample_products(Currency::USD);
        assert_eq!(products.len(), 12);
        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.id.get() as usize, index + 1);
            assert!(product.validate().is_ok(), "{} failed validation", product.id);
        }
    }

    #[test]
    fn test_sample_catalog_categories() {
        let products = sample_products(Currency::USD);
        let labels = distinct_categories(&products);
        let names: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            names,
            vec!["electronics", "furniture", "clothing", "kitchen", "accessories", "fitness", "home"]
        );
    }

    #[test]
    fn test_sample_catalog_currency() {
        let products = sample_products(Currency::EUR);
        assert!(products.iter().all(|p| p.price.currency == Currency::EUR));
        assert_eq!(products[0].price.display(), "\u{20ac}249.99");
    }
}
