use std::collections::HashMap;

use crate::models::AttributePair;

/// A predefined attribute with its allowed values, grouped by a free-text
/// vocabulary key (`muebles`, `decoracion`, ...). This is reference data for
/// the authoring forms, unrelated to the Category entities on products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeOption {
    pub id: u32,
    pub name: &'static str,
    pub values: &'static [&'static str],
    pub category: &'static str,
}

pub const ATTRIBUTE_OPTIONS: &[AttributeOption] = &[
    AttributeOption {
        id: 1,
        name: "Material",
        values: &["Madera", "Metal", "Vidrio", "Mimbre", "Plástico", "Mármol"],
        category: "muebles",
    },
    AttributeOption {
        id: 2,
        name: "Color",
        values: &[
            "Natural", "Blanco", "Negro", "Nogal", "Roble", "Gris", "Beige",
        ],
        category: "muebles",
    },
    AttributeOption {
        id: 3,
        name: "Tamaño",
        values: &["Pequeño", "Mediano", "Grande", "Extra grande"],
        category: "muebles",
    },
    AttributeOption {
        id: 4,
        name: "Estilo",
        values: &[
            "Moderno",
            "Rústico",
            "Industrial",
            "Escandinavo",
            "Clásico",
        ],
        category: "muebles",
    },
    AttributeOption {
        id: 5,
        name: "Color",
        values: &["Dorado", "Plateado", "Cobre", "Blanco", "Negro"],
        category: "decoracion",
    },
    AttributeOption {
        id: 6,
        name: "Ambiente",
        values: &["Sala", "Comedor", "Dormitorio", "Estudio", "Baño"],
        category: "decoracion",
    },
    AttributeOption {
        id: 7,
        name: "Material",
        values: &["Cerámica", "Acero inoxidable", "Bambú", "Silicona"],
        category: "cocina",
    },
    AttributeOption {
        id: 8,
        name: "Capacidad",
        values: &["2 personas", "4 personas", "6 personas", "8 personas"],
        category: "cocina",
    },
    AttributeOption {
        id: 9,
        name: "Tipo de luz",
        values: &["Cálida", "Fría", "Neutra", "Regulable"],
        category: "iluminacion",
    },
    AttributeOption {
        id: 10,
        name: "Resistencia",
        values: &["Interior", "Exterior cubierto", "Intemperie"],
        category: "exterior",
    },
];

/// All options, or only those under the given vocabulary key.
pub fn by_category(category: Option<&str>) -> Vec<&'static AttributeOption> {
    ATTRIBUTE_OPTIONS
        .iter()
        .filter(|o| category.is_none_or(|c| o.category == c))
        .collect()
}

/// Distinct vocabulary keys in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for option in ATTRIBUTE_OPTIONS {
        if !seen.contains(&option.category) {
            seen.push(option.category);
        }
    }
    seen
}

/// Attributes being assembled in a product or variant form. Lives only while
/// the form is open; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct AttributeDraft {
    selected: Vec<AttributePair>,
    custom: Vec<AttributePair>,
}

impl AttributeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predefined attribute. Returns false when the value is not one
    /// of the option's allowed values.
    pub fn select(&mut self, option: &AttributeOption, value: &str) -> bool {
        if !option.values.contains(&value) {
            return false;
        }
        self.selected.push(AttributePair::new(option.name, value));
        true
    }

    /// Adds a free-text name/value pair.
    pub fn add_custom(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom.push(AttributePair::new(name, value));
    }

    pub fn selected(&self) -> &[AttributePair] {
        &self.selected
    }

    pub fn custom(&self) -> &[AttributePair] {
        &self.custom
    }

    /// Everything the form renders and serializes: selected entries first,
    /// custom entries after.
    pub fn all(&self) -> Vec<AttributePair> {
        let mut out = self.selected.clone();
        out.extend(self.custom.iter().cloned());
        out
    }

    /// Removes exact name/value matches from both lists. Matching is by the
    /// full pair, so the same name with another value stays.
    pub fn remove(&mut self, name: &str, value: &str) {
        self.selected
            .retain(|p| !(p.name == name && p.value == value));
        self.custom.retain(|p| !(p.name == name && p.value == value));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.custom.clear();
    }

    /// Folds `all` into the name-keyed map the backend expects. When two
    /// entries share a name the later one wins; callers relying on duplicate
    /// names should not expect both to survive.
    pub fn to_backend_format(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for pair in self.all() {
            map.insert(pair.name, pair.value);
        }
        map
    }
}
