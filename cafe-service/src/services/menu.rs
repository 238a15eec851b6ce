//! The café menu. Compiled in, built once per process, never mutated.

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::models::{Menu, MenuCategory, MenuItem};

const VEG_OR_NON_VEG: &[&str] = &["veg", "non-veg"];

static MENU: Lazy<Menu> = Lazy::new(build_menu);

/// The shared menu table.
pub fn menu() -> &'static Menu {
    &MENU
}

struct Entry {
    name: &'static str,
    price: Option<u32>,
    description: &'static str,
    dietary: &'static [&'static str],
}

impl Entry {
    fn described(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn dietary(mut self, tags: &'static [&'static str]) -> Self {
        self.dietary = tags;
        self
    }

    fn into_item(self, category: &str) -> MenuItem {
        MenuItem {
            id: menu_item_id(category, self.name),
            name: self.name.to_string(),
            price: self.price,
            category: category.to_string(),
            description: self.description.to_string(),
            dietary: self.dietary.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

fn item(name: &'static str, price: u32) -> Entry {
    Entry {
        name,
        price: Some(price),
        description: "",
        dietary: &[],
    }
}

/// Price on request.
fn unpriced(name: &'static str) -> Entry {
    Entry {
        price: None,
        ..item(name, 0)
    }
}

fn category(name: &'static str, entries: Vec<Entry>) -> (&'static str, Vec<Entry>) {
    (name, entries)
}

/// Stable across restarts: derived from category and item name.
fn menu_item_id(category: &str, name: &str) -> String {
    let key = format!("fika-menu/{}/{}", category, name);
    Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes()).to_string()
}

fn build_menu() -> Menu {
    let categories = table()
        .into_iter()
        .map(|(name, entries)| MenuCategory {
            name: name.to_string(),
            items: entries
                .into_iter()
                .map(|entry| entry.into_item(name))
                .collect(),
        })
        .collect();

    Menu { categories }
}

fn table() -> Vec<(&'static str, Vec<Entry>)> {
    vec![
        category(
            "Fresh Squeeze",
            vec![
                item("Watermelon Juice", 250),
                item("Orange Juice", 320),
                item("Classic Lemonade", 250),
                item("ABC", 320),
            ],
        ),
        category(
            "Cold",
            vec![
                item("Iced Americano", 290),
                item("Iced Latte", 350),
                item("Espresso Tonic", 280),
                item("Iced Mocha", 320),
                item("Classic Cold Coffee", 350),
                item("Cold Brew", 290),
                item("Vietnamese Mocha Cloud", 350),
                item("Cold Brew Tonic", 350),
                item("Cold Brew Juice", 350),
            ],
        ),
        category(
            "Hot",
            vec![
                item("Espresso", 210),
                item("Macchiato", 290),
                item("Americano", 290),
                item("Cortado", 350),
                item("Flat White", 350),
                item("Café Latte", 290),
                item("Cappuccino", 290),
                item("Mocha", 290),
                item("Hot Chocolate", 350),
            ],
        ),
        category(
            "Specials",
            vec![
                item("Vietnamese Coffee", 380),
                item("Mazagran (Portugal)", 380),
                item("Matcha Latte", 350),
                item("Mango Matcha Latte", 450),
                item("Tiramisu Iced Latte", 520),
            ],
        ),
        category(
            "Manual Brew",
            vec![
                item("French Press", 400),
                item("Pour Over", 380),
            ],
        ),
        category(
            "Affogato",
            vec![
                item("Chocolate Malabar", 420),
                item("Vanilla", 320),
                item("Salted Caramel", 350),
            ],
        ),
        category(
            "Spill The Tea",
            vec![
                item("Masala Chai", 220),
                item("Ginger Honey Lemon Tea", 200),
                item("Lemon Iced Tea", 260),
            ],
        ),
        category(
            "All Day Breakfast",
            vec![
                item("Turkish Eggs", 420),
                item("Chorizo Egg Benedict", 480),
                item("French Toast", 430),
                item("French Omelette", 450),
                item("Ros Omelette", 450),
                item("Fika Full House Brekkin", 590),
                item("Shake Shake Shuka", 430),
                item("Sunny Side Up", 420),
                item("Classic Scrambled Eggs", 400),
                item("English Breakfast Platter", 490),
            ],
        ),
        category(
            "Wafflin Around",
            vec![
                item("Classic Waffles", 380),
                item("Sea Salt Chocolate", 450),
            ],
        ),
        category(
            "Ssup Hot Cakes",
            vec![
                item("Tiramisu Pancake", 450),
                item("Banana Brulee Pancake", 430),
                item("Classic Pancake", 420).described("with choice of honey maple"),
            ],
        ),
        category(
            "Burgers",
            vec![
                item("Cottage Surprise", 520),
                item("Veg Mania Burger", 520),
                item("Nashville Fried Chicken", 540),
                item("American Cowboy", 540),
            ],
        ),
        category(
            "House Classics",
            vec![
                item("Bombay Bachelor Sandwich", 320),
                item("Avocado Caprese", 475),
                item("Mustard Chicken", 450),
                item("Vegetable Club", 350),
                item("Chicken Lemon Herb", 650),
            ],
        ),
        category(
            "Toasties",
            vec![
                item("Cucumber Cheese Toast", 320),
                item("PBC Toast", 350),
                item("Avo Guacamole Toast", 480),
                item("Shrooms Toast", 380),
                item("Panzanella", 380),
                item("Nutella Banana Toastie", 380),
                item("Chilli Cheese Garlic", 380),
            ],
        ),
        category(
            "Sourdough Sammy",
            vec![
                item("Korean Sourdough Sammy", 520),
                item("Birria Chicken Cheese Skirt", 540),
                item("Mushroom Caramelized Onion Grilled Cheese", 480),
            ],
        ),
        category(
            "Smoothie Bowl",
            vec![
                item("Tropical Mango Blueberry", 440),
                item("Berry Blast", 460),
                item("Coco Peanut (Vegan)", 480),
                item("Espresso Dates", 460),
            ],
        ),
        category(
            "Pizza Palooza",
            vec![
                item("Classic Margarita", 620),
                item("Farmville", 620),
                item("Greek Souvlaki Chicken", 650),
                item("Classic Pepperoni / Chorizo Hot Honey", 750),
                item("Goat", 680),
            ],
        ),
        category(
            "Bowls",
            vec![
                item("Burrito", 450).described("Mexican vegetarian"),
                item("Hakka Noodles", 450).dietary(VEG_OR_NON_VEG),
                item("Chef Special Wok Noodles", 480).dietary(VEG_OR_NON_VEG),
                item("Manchurian", 420).dietary(VEG_OR_NON_VEG),
            ],
        ),
        category(
            "Pasta",
            vec![
                item("Penné Allá Romanía", 400).dietary(VEG_OR_NON_VEG),
                item("Penné Rossé Vivo", 450).dietary(VEG_OR_NON_VEG),
                item("Penné Rosé", 430).dietary(VEG_OR_NON_VEG),
                item("Penné Al Basilicó", 420).dietary(VEG_OR_NON_VEG),
                item("Spaghetti Aglio É Olio Classico", 530).dietary(VEG_OR_NON_VEG),
                item("Spaghetti Alla Créme", 550).dietary(VEG_OR_NON_VEG),
                item("Spaghetti Al Pomodoro", 530).dietary(VEG_OR_NON_VEG),
                item("Mac And Cheese", 420).dietary(VEG_OR_NON_VEG),
            ],
        ),
        category(
            "Tapas",
            vec![
                item("Creole Lime Chicken Bite", 420),
                item("Skillet Nachos", 440).dietary(VEG_OR_NON_VEG),
                item("Pumpkin Borani", 470),
                item("Mediterranean Hummus", 450),
                item("Mezze Platter", 550).dietary(VEG_OR_NON_VEG),
            ],
        ),
        category(
            "Mighty Munchies",
            vec![
                item("Korean Cream Cheese Garlic Bun", 350),
                item("Cracked Potatoes", 350),
                item("Togarashi Avo Taco With Spicy Pina Salsa", 480),
                item("Queso Fries", 420),
                item("Fries Carnival", 430),
                item("KFC", 450),
                item("Jalapeno Cheese Bombs", 420),
                item("Vegetable Cigar Roll", 370),
                item("Chicken Cigar Roll", 450),
                item("Classic Fries", 350),
                item("Chicken Nuggets", 450),
                item("Truffle Fries", 470),
            ],
        ),
        category(
            "Salad Bar",
            vec![
                item("Waldorf Salad", 450),
                item("Caesar Salad", 480),
                item("Mediterranean Chickpea Salad", 450),
                item("Melon Bliss Salad", 360),
                item("Quinoa & Grilled Cottage Cheese", 380),
                item("Quinoa & Smoked Chicken", 380),
            ],
        ),
        category(
            "Indian Affair",
            vec![
                item("Shahi Paneer", 450),
                item("Subz Miloni", 390),
                item("Kadhai Paneer", 420),
                item("Murgh Makhani", 620),
                item("Kadhai Chicken", 480),
                item("Railway Chicken Curry", 480),
                item("Nizami Dal", 420),
                item("Dal Makhani", 470),
            ],
        ),
        category(
            "Sides and Staples",
            vec![
                item("Roasted Papad (2 PCS)", 55),
                item("Green Salad", 190),
                item("Pudina Raita", 175),
                item("Boondi Raita", 159),
                item("Mix Veg Raita", 199),
                item("Tawa Roti", 65),
                item("Butter Roti", 75),
                item("Tawa Paratha", 100),
                item("Laccha Paratha", 150),
                item("Steamed Rice", 240),
                item("Jeera Rice", 220),
                item("Vegetable Pulao", 250),
                item("Masala Khichdi", 320),
            ],
        ),
        category(
            "Desserts",
            vec![
                unpriced("Walnut & Banana Cake"),
                unpriced("Chocolate Marble Cake"),
                unpriced("Chocolate Muffin"),
                unpriced("Tiramisu"),
                unpriced("Sea Salt Chocolate Cookies"),
                unpriced("Peanut Butter Cookies"),
            ],
        ),
        category(
            "Pawsome",
            vec![
                item("Boiled Chicken", 250),
                item("Steamed Rice With Milk", 250),
                item("Boiled Eggs With Rice", 250),
                item("Boiled Vegetable Bowl", 200),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_expected_shape() {
        let menu = menu();
        assert_eq!(menu.categories.len(), 25);
        assert_eq!(menu.item_count(), 144);

        assert_eq!(menu.categories.first().unwrap().name, "Fresh Squeeze");
        assert_eq!(menu.categories.last().unwrap().name, "Pawsome");
    }

    #[test]
    fn repeated_builds_are_identical() {
        assert_eq!(build_menu(), *menu());
        assert!(std::ptr::eq(menu(), menu()));
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let ids: HashSet<&str> = menu()
            .categories
            .iter()
            .flat_map(|category| category.items.iter().map(|item| item.id.as_str()))
            .collect();
        assert_eq!(ids.len(), 144);

        let espresso = &menu().category("Hot").unwrap().items[0];
        assert_eq!(espresso.name, "Espresso");
        assert_eq!(espresso.id, menu_item_id("Hot", "Espresso"));
    }

    #[test]
    fn only_desserts_are_priced_on_request() {
        let unpriced: Vec<&MenuItem> = menu()
            .categories
            .iter()
            .flat_map(|category| category.items.iter())
            .filter(|item| item.price.is_none())
            .collect();

        assert_eq!(unpriced.len(), 6);
        assert!(unpriced.iter().all(|item| item.category == "Desserts"));
    }

    #[test]
    fn items_carry_category_description_and_tags() {
        let menu = menu();

        let pancake = menu
            .category("Ssup Hot Cakes")
            .unwrap()
            .items
            .iter()
            .find(|item| item.name == "Classic Pancake")
            .unwrap();
        assert_eq!(pancake.category, "Ssup Hot Cakes");
        assert_eq!(pancake.description, "with choice of honey maple");
        assert_eq!(pancake.price, Some(420));

        let pasta = menu.category("Pasta").unwrap();
        assert_eq!(pasta.items.len(), 8);
        assert!(pasta
            .items
            .iter()
            .all(|item| item.dietary == vec!["veg".to_string(), "non-veg".to_string()]));

        let espresso = &menu.category("Hot").unwrap().items[0];
        assert!(espresso.dietary.is_empty());
        assert_eq!(espresso.description, "");
    }
}
