//! Curated lookup tables shared by every analysis.
//!
//! All terms are lowercase and matched as plain substrings of lowercased
//! label text.

use crate::domain::ingredient_analysis::entities::{ConcernLevel, Severity};

/// A family of ingredient names that all signal one allergen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllergenCategory {
    pub key: &'static str,
    /// User-facing labels that select this category besides its key.
    pub aliases: &'static [&'static str],
    pub terms: &'static [&'static str],
    pub severity: Severity,
}

/// Additive names grouped by concern level. The three lists are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditiveCategory {
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub low: &'static [&'static str],
}

impl AdditiveCategory {
    pub fn names(&self, concern: ConcernLevel) -> &'static [&'static str] {
        match concern {
            ConcernLevel::High => self.high,
            ConcernLevel::Medium => self.medium,
            ConcernLevel::Low => self.low,
        }
    }
}

pub const ALLERGEN_CATEGORIES: &[AllergenCategory] = &[
    AllergenCategory {
        key: "dairy",
        aliases: &["milk"],
        terms: &[
            "milk",
            "cream",
            "butter",
            "cheese",
            "yogurt",
            "whey",
            "lactose",
            "casein",
            "dairy",
            "milk protein",
            "milk solids",
            "buttermilk",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "eggs",
        aliases: &[],
        terms: &[
            "egg",
            "albumin",
            "lysozyme",
            "globulin",
            "ovomucin",
            "ovalbumin",
            "egg white",
            "egg yolk",
            "mayonnaise",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "peanuts",
        aliases: &[],
        terms: &["peanut", "arachis", "groundnut", "goober", "monkey nut"],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "tree nuts",
        aliases: &[],
        terms: &[
            "almond",
            "hazelnut",
            "walnut",
            "cashew",
            "pecan",
            "brazil nut",
            "pistachio",
            "macadamia",
            "pine nut",
            "chestnut",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "fish",
        aliases: &[],
        terms: &[
            "fish", "cod", "salmon", "trout", "tuna", "pollock", "haddock", "anchovy", "bass",
            "catfish", "flounder", "halibut", "mahi", "sardine", "tilapia",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "shellfish",
        aliases: &[],
        terms: &[
            "shellfish", "crab", "lobster", "shrimp", "prawn", "crayfish", "clam", "mussel",
            "oyster", "scallop", "squid", "octopus",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "wheat",
        aliases: &[],
        terms: &[
            "wheat", "flour", "bread", "bran", "starch", "semolina", "durum", "spelt", "farina",
            "couscous", "bulgur", "seitan",
        ],
        severity: Severity::Medium,
    },
    AllergenCategory {
        key: "soy",
        aliases: &[],
        terms: &[
            "soy",
            "soya",
            "tofu",
            "edamame",
            "miso",
            "tempeh",
            "textured vegetable protein",
            "tvp",
            "soy protein",
            "soy lecithin",
        ],
        severity: Severity::Medium,
    },
    AllergenCategory {
        key: "sesame",
        aliases: &[],
        terms: &[
            "sesame",
            "tahini",
            "sesame oil",
            "sesame seed",
            "benne",
            "gingelly",
        ],
        severity: Severity::Medium,
    },
    AllergenCategory {
        key: "gluten",
        aliases: &[],
        terms: &[
            "gluten",
            "wheat",
            "rye",
            "barley",
            "oats",
            "spelt",
            "kamut",
            "triticale",
            "farro",
            "durum",
            "semolina",
            "graham",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "mustard",
        aliases: &[],
        terms: &[
            "mustard",
            "mustard seed",
            "mustard powder",
            "dijon",
            "wasabi",
        ],
        severity: Severity::Medium,
    },
    AllergenCategory {
        key: "celery",
        aliases: &[],
        terms: &["celery", "celery seed", "celery salt", "celeriac"],
        severity: Severity::Medium,
    },
    AllergenCategory {
        key: "lupin",
        aliases: &[],
        terms: &["lupin", "lupine", "lupin flour", "lupini"],
        severity: Severity::Medium,
    },
    AllergenCategory {
        key: "molluscs",
        aliases: &[],
        terms: &[
            "mollusc",
            "oyster",
            "mussel",
            "clam",
            "scallop",
            "snail",
            "squid",
            "octopus",
            "cuttlefish",
        ],
        severity: Severity::High,
    },
    AllergenCategory {
        key: "sulfites",
        aliases: &[],
        terms: &[
            "sulfite",
            "sulphite",
            "metabisulfite",
            "sulfur dioxide",
            "so2",
            "preservative",
        ],
        severity: Severity::Low,
    },
];

pub const ADDITIVES: AdditiveCategory = AdditiveCategory {
    high: &[
        "sodium nitrite",
        "sodium nitrate",
        "bha",
        "bht",
        "tbhq",
        "potassium bromate",
        "propyl gallate",
        "brilliant blue",
        "red 40",
        "red 3",
        "yellow 5",
        "yellow 6",
        "blue 1",
        "blue 2",
        "green 3",
        "brominated vegetable oil",
        "propylene glycol",
        "butylated",
        "carrageenan",
        "partially hydrogenated",
        "msg",
        "monosodium glutamate",
        "aspartame",
        "acesulfame",
        "saccharin",
        "high fructose corn syrup",
    ],
    medium: &[
        "caramel color",
        "soy lecithin",
        "corn syrup",
        "maltodextrin",
        "dextrose",
        "guar gum",
        "xanthan gum",
        "natural flavors",
        "artificial flavors",
        "modified food starch",
        "sodium benzoate",
        "potassium sorbate",
        "calcium disodium edta",
        "sodium phosphate",
        "artificial sweetener",
        "polysorbate",
        "annatto",
    ],
    low: &[
        "vitamin e",
        "tocopherol",
        "ascorbic acid",
        "citric acid",
        "lactic acid",
        "calcium chloride",
        "pectin",
        "beetroot extract",
        "beta carotene",
        "cinnamon extract",
        "turmeric extract",
        "rosemary extract",
        "sea salt",
        "himalayan salt",
    ],
};

pub const HEALTHY_TERMS: &[&str] = &[
    "whole grain",
    "organic",
    "natural",
    "vitamin",
    "mineral",
    "fiber",
    "protein",
    "antioxidant",
    "probiotic",
    "prebiotic",
    "omega-3",
    "unsweetened",
    "quinoa",
    "chia",
    "flax",
    "legume",
    "lentil",
    "bean",
    "vegetable",
    "fruit",
    "nuts",
    "seeds",
    "olive oil",
    "avocado oil",
    "coconut oil",
    "turmeric",
    "ginger",
    "spinach",
    "kale",
    "broccoli",
    "carrot",
    "sweet potato",
    "tomato",
    "garlic",
    "onion",
    "berry",
    "apple",
    "citrus",
    "whole food",
];

pub const RED_FLAGS: &[&str] = &[
    "partially hydrogenated",
    "hydrogenated",
    "trans fat",
    "high fructose",
    "artificial color",
    "artificial flavour",
    "artificial flavor",
];

/// Generic words that show up on almost every ingredients label.
pub const COMMON_FOOD_TERMS: &[&str] = &[
    "water",
    "sugar",
    "salt",
    "flour",
    "oil",
    "milk",
    "soy",
    "wheat",
    "corn",
    "extract",
    "natural",
    "artificial",
    "flavor",
    "preservative",
    "vitamin",
    "acid",
    "color",
    "sodium",
    "starch",
    "protein",
];

/// Allergy labels offered to users when they build their profile.
pub const ALLERGY_VOCABULARY: &[&str] = &[
    "Milk",
    "Eggs",
    "Fish",
    "Shellfish",
    "Tree Nuts",
    "Peanuts",
    "Wheat",
    "Soybeans",
    "Sesame",
    "Gluten",
    "Sulfites",
    "Mustard",
    "MSG",
    "Artificial Sweeteners",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        let all_terms = ALLERGEN_CATEGORIES
            .iter()
            .flat_map(|c| c.terms.iter().chain(c.aliases.iter()))
            .chain(ADDITIVES.high)
            .chain(ADDITIVES.medium)
            .chain(ADDITIVES.low)
            .chain(HEALTHY_TERMS)
            .chain(RED_FLAGS)
            .chain(COMMON_FOOD_TERMS);

        for term in all_terms {
            assert_eq!(*term, term.to_lowercase(), "{term} must be lowercase");
        }
    }

    #[test]
    fn test_additive_lists_are_disjoint() {
        let high: HashSet<_> = ADDITIVES.high.iter().collect();
        let medium: HashSet<_> = ADDITIVES.medium.iter().collect();
        let low: HashSet<_> = ADDITIVES.low.iter().collect();

        assert!(high.is_disjoint(&medium));
        assert!(high.is_disjoint(&low));
        assert!(medium.is_disjoint(&low));
    }

    #[test]
    fn test_category_keys_are_unique() {
        let keys: HashSet<_> = ALLERGEN_CATEGORIES.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), ALLERGEN_CATEGORIES.len());
        assert_eq!(ALLERGEN_CATEGORIES.len(), 15);
    }
}
