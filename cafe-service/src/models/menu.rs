use serde::{ser::SerializeMap, Serialize, Serializer};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// `None` means price on request.
    pub price: Option<u32>,
    pub category: String,
    pub description: String,
    pub dietary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The full menu. Serializes as `{"categories": {"<name>": [items...]}}`
/// with categories in menu order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Menu {
    #[serde(serialize_with = "serialize_categories")]
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn item_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.items.len())
            .sum()
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_categories<S>(categories: &Vec<MenuCategory>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(categories.len()))?;
    for category in categories {
        map.serialize_entry(&category.name, &category.items)?;
    }
    map.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: Option<u32>, category: &str) -> MenuItem {
        MenuItem {
            id: format!("{}-id", name),
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: String::new(),
            dietary: Vec::new(),
        }
    }

    #[test]
    fn serializes_categories_as_ordered_map() {
        let menu = Menu {
            categories: vec![
                MenuCategory {
                    name: "Hot".to_string(),
                    items: vec![item("Espresso", Some(210), "Hot")],
                },
                MenuCategory {
                    name: "Desserts".to_string(),
                    items: vec![item("Tiramisu", None, "Desserts")],
                },
            ],
        };

        let json = serde_json::to_string(&menu).unwrap();
        assert!(json.starts_with(r#"{"categories":{"Hot":["#));
        assert!(json.find("\"Hot\"").unwrap() < json.find("\"Desserts\"").unwrap());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["categories"]["Hot"][0]["price"], 210);
        assert!(value["categories"]["Desserts"][0]["price"].is_null());
        assert_eq!(menu.item_count(), 2);
    }
}
