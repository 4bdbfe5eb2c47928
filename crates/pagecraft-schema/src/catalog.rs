//! Per-template field schema catalog.
//!
//! Pure lookup tables: one ordered descriptor list per closed template key,
//! plus a generic fallback so the editor never fails outright for a key it
//! does not recognise.

use crate::{field::FieldDescriptor as F, key::TemplateKey};

/// Generic two-field schema used for `Custom` keys: a plain title and a
/// whole-form raw JSON escape hatch.
pub const FALLBACK: &[F] = &[
    F::text("title", "Title (Generic)"),
    F::json_full("raw_json", "Configuration (JSON)"),
];

const HERO_BUTTON_ITEM: &[F] = &[
    F::text("text", "Button Text"),
    F::text("link", "Link URL"),
    F::select("variant", "Style Variant", &["primary", "secondary", "outline"]),
];

const HERO_SECTION: &[F] = &[
    F::select("variant", "Variant", &["simple", "hero"]),
    F::text("title", "Heading / Title"),
    F::textarea("description", "Description"),
    F::text("badge", "Badge Text"),
    F::image("backgroundImage", "Background Image URL"),
    F::text_with("gradient", "Gradient Class", "bg-gradient-to-r ..."),
    F::text_with("underlineColor", "Underline Color Class", "from-blue-500 to-indigo-500"),
    F::list("buttons", "Buttons List", HERO_BUTTON_ITEM),
];

const DESIGN_ONE: &[F] = &[
    F::select("variant", "Variant", &["simple", "hero"]),
    F::text("title", "Title"),
    F::textarea("description", "Description"),
    F::image("backgroundImage", "Background Image URL"),
    F::text("badge", "Badge (Simple Only)"),
    F::text_with(
        "underlineColor",
        "Underline Color Class (Simple Only)",
        "from-blue-500 to-indigo-500",
    ),
    F::text_with("gradient", "Gradient Class (Hero Only)", "bg-gradient-to-r ..."),
    F::list(
        "buttons",
        "Buttons List (Hero Only)",
        &[
            F::text("text", "Button Text"),
            F::text("link", "Link URL"),
            F::select("primary", "Is Primary?", &["true", "false"]),
        ],
    ),
];

const FEATURE_ITEM: &[F] = &[
    F::text("title", "Title"),
    F::textarea("description", "Description"),
    F::text("icon", "Icon"),
];

const DESIGN_TWO: &[F] = &[F::list(
    "items",
    "Features List",
    &[
        F::text("title", "Title"),
        F::textarea("description", "Description"),
        F::text("icon", "Icon (React Icon Name)"),
    ],
)];

const DESIGN_THREE: &[F] = &[F::list(
    "cards",
    "Cards List",
    &[
        F::text("title", "Title"),
        F::textarea("content", "Content"),
        F::text("icon", "Icon"),
        F::text("colorTheme", "Color Theme (e.g. green, teal)"),
    ],
)];

const DESIGN_FOUR: &[F] = &[
    F::text("title", "Title"),
    F::textarea("description", "Description"),
    F::list(
        "items",
        "Faculty / Team Members",
        &[
            F::text("name", "Name"),
            F::text("position", "Position / Role"),
            F::image("image", "Photo URL"),
            F::text("qualification", "Qualification"),
            F::text("specialization", "Specialization"),
            F::text("email", "Email"),
        ],
    ),
];

const DESIGN_FIVE: &[F] = &[
    F::text("title", "Title"),
    F::textarea("description", "Description"),
    F::list(
        "swotData",
        "SWOT Data",
        &[
            F::select(
                "type",
                "Type (strengths, weaknesses, opportunities, threats)",
                &["strengths", "weaknesses", "opportunities", "threats"],
            ),
            F::list("items", "Items List", &[F::text("text", "Item Text")]),
        ],
    ),
];

const DESIGN_SIX: &[F] = &[
    F::text("title", "Title"),
    F::list("items", "Features List", FEATURE_ITEM),
];

const DESIGN_SEVEN: &[F] = &[F::list(
    "tabs",
    "Tabs List",
    &[
        F::text("id", "Tab ID (unique)"),
        F::text("label", "Tab Label"),
        F::text("icon", "Icon (e.g. FaHome)"),
        F::list(
            "sections",
            "Sections in Tab",
            &[
                F::text("templateKey", "Template Key (e.g. hero_section)"),
                F::text("id", "Section ID (unique)"),
                F::json("data", "Section Data (JSON)"),
            ],
        ),
    ],
)];

const DESIGN_EIGHT: &[F] = &[
    F::text("title", "Title"),
    F::text("badge", "Badge"),
    F::textarea("content", "Main Content"),
    F::list(
        "images",
        "Carousel Images",
        &[F::image("src", "Image URL"), F::text("alt", "Alt Text")],
    ),
    F::list(
        "features",
        "Features List",
        &[
            F::text("title", "Title"),
            F::text("subtitle", "Subtitle"),
            F::text("icon", "Icon"),
        ],
    ),
];

const DESIGN_NINE: &[F] = &[
    F::text("title", "Title"),
    F::select("variant", "Variant", &["simple", "publication", "visit"]),
    F::number("columns", "Columns (2, 3, 4)"),
    F::list(
        "items",
        "Items List",
        &[
            F::text("title", "Title"),
            F::textarea("description", "Description"),
            F::text("date", "Date"),
            F::text("subtitle", "Subtitle/Dept"),
            F::text("meta", "Meta Info"),
            F::text("icon", "Icon"),
        ],
    ),
];

const DESIGN_TEN: &[F] = &[
    F::text("title", "Title"),
    F::textarea("description", "Description"),
    F::image("image", "Image"),
    F::list("features", "Features List", FEATURE_ITEM),
];

const DESIGN_ELEVEN: &[F] = &[
    F::text("title", "Title"),
    F::textarea("description", "Description"),
    F::image("image", "Image"),
    F::text("buttonText", "Button Text"),
    F::text("buttonLink", "Button Link"),
    F::select("reverse", "Reverse Layout", &["true", "false"]),
];

const DESIGN_TWELVE: &[F] = &[
    F::text("title", "Title"),
    F::list(
        "items",
        "Team / Faculty Members",
        &[
            F::text("name", "Name"),
            F::text("designation", "Designation"),
            F::image("image", "Photo URL"),
            F::text("specialization", "Specialization"),
            F::text("email", "Email"),
            F::list(
                "achievements",
                "Achievements List",
                &[F::text("text", "Achievement Text")],
            ),
        ],
    ),
];

const DESIGN_THIRTEEN: &[F] = &[
    F::text("title", "Title"),
    F::list(
        "items",
        "Departments / Items",
        &[
            F::text("title", "Title/Name"),
            F::textarea("description", "Description"),
            F::text("link", "Link URL/Slug"),
            F::text("icon", "Icon"),
            F::text("gradient", "Gradient Class"),
        ],
    ),
];

const DESIGN_FOURTEEN: &[F] = &[
    F::text("title", "Title"),
    F::text("badge", "Badge"),
    F::text_with("underlineColor", "Underline Color Class", "from-blue-500 to-indigo-500"),
    F::textarea("description", "Description"),
    F::list(
        "items",
        "Features / Items",
        &[
            F::text("title", "Title"),
            F::textarea("description", "Description"),
            F::text("link", "Link URL"),
            F::select("target", "Link Target", &["_self", "_blank"]),
            F::text("icon", "Icon (Emoji or Class)"),
            F::text_with("gradient", "Gradient Class", "from-blue-500 to-cyan-500"),
        ],
    ),
    F::image("backgroundImage", "Background Image URL"),
    F::text_with("gradient", "Gradient Class", "bg-gradient-to-r ..."),
    F::list("buttons", "Buttons List", HERO_BUTTON_ITEM),
];

const DESIGN_FIFTEEN: &[F] = &[
    F::text("title", "Title"),
    F::text("videoUrl", "Video URL"),
    F::image("thumbnail", "Video Thumbnail"),
    F::textarea("description", "Description"),
];

const DESIGN_SIXTEEN: &[F] = &[
    F::text("title", "Section Title"),
    F::textarea("description", "Description"),
    F::select(
        "dataSource",
        "Data Source (Dynamic)",
        &["", "project", "gate", "placement", "mooc", "achievement"],
    ),
    F::list(
        "projects",
        "Manual Projects List",
        &[
            F::text("projectName", "Project Name"),
            F::text("studentName", "Student Name"),
            F::text("batch", "Batch"),
            F::text("branch", "Branch"),
            F::text("supervisor", "Supervisor"),
            F::text("technology", "Technology"),
            F::text("githubLink", "GitHub Link"),
            F::text("pptLink", "PPT Link"),
        ],
    ),
];

const DESIGN_SEVENTEEN: &[F] = &[
    F::text("title", "Section Title"),
    F::textarea("description", "Description"),
    F::list(
        "images",
        "Gallery Images",
        &[F::image("src", "Image URL"), F::text("caption", "Caption")],
    ),
];

const DESIGN_EIGHTEEN: &[F] = &[
    F::text("title", "Title"),
    F::list(
        "faqItems",
        "FAQ Items",
        &[F::text("question", "Question"), F::textarea("answer", "Answer")],
    ),
];

const DESIGN_NINETEEN: &[F] = &[
    F::text("title", "Section Title"),
    F::image("image", "Person Image"),
    F::text("name", "Name"),
    F::text("designation", "Designation"),
    F::textarea("quote", "Quote"),
    F::textarea("content", "Content (HTML supported)"),
];

const DESIGN_TWENTY: &[F] = &[
    F::text("title", "Section Title"),
    F::text("subtitle", "Subtitle"),
    F::textarea("content", "Content (HTML)"),
    F::image("backgroundImage", "Header Background Image"),
    F::number("limit", "Number of Events (leave empty for all)"),
];

const DESIGN_TWENTY_ONE: &[F] = &[
    F::text("title", "Title"),
    F::text("mapEmbedUrl", "Map Embed URL"),
    F::list(
        "contactInfo",
        "Contact Details",
        &[
            F::text("label", "Label (e.g. Phone)"),
            F::text("value", "Value"),
            F::text("icon", "Icon"),
        ],
    ),
];

const DESIGN_TWENTY_TWO: &[F] = &[
    F::text_with("title", "Form Title", "Feedback/Query Form"),
    F::text("subtitle", "Form Subtitle"),
    F::text_with("buttonText", "Button Text", "Send"),
    F::text_with("venueTitle", "Venue Title", "Venue"),
    F::textarea_with("venueName", "Venue Name", "Campus name and address..."),
    F::textarea_with("venueDetails", "Venue Contact Details", "Phone, Email, Website..."),
    F::text("mapEmbedUrl", "Google Maps Embed URL"),
    F::image("backgroundImage", "Background Image"),
];

const ABOUT_BRIEF: &[F] = &[
    F::text("title", "Title"),
    F::textarea("text", "Content"),
];

const STATS_GRID: &[F] = &[F::list(
    "stats",
    "Statistics",
    &[
        F::text("label", "Label"),
        F::text("value", "Value"),
        F::text("icon", "Icon"),
    ],
)];

const DEPARTMENT_HERO: &[F] = &[
    F::text("title", "Department Title"),
    F::text("subtitle", "Subtitle"),
    F::image("backgroundImage", "Hero Image"),
    F::list(
        "chips",
        "Action Chips",
        &[F::text("label", "Label"), F::text("link", "Link")],
    ),
];

const HOD_MESSAGE: &[F] = &[
    F::text("name", "HOD Name"),
    F::text("designation", "Designation"),
    F::image("image", "HOD Photo"),
    F::textarea("message", "Message"),
];

const VISION_MISSION: &[F] = &[
    F::textarea("vision", "Vision Statement"),
    F::list("mission", "Mission Points", &[F::textarea("text", "Point Text")]),
];

///
/// Catalog
///

pub struct Catalog;

impl Catalog {
    /// Ordered field descriptors for a template key.
    ///
    /// `Custom` keys resolve to [`FALLBACK`], as do the late design keys
    /// (`design_twenty_three` onward) that render but were never given a
    /// dedicated editor schema. Every closed key resolves to a valid entry
    /// (checked by the coverage test below).
    #[must_use]
    pub const fn get(key: &TemplateKey) -> &'static [F] {
        match key {
            TemplateKey::HeroSection => HERO_SECTION,
            TemplateKey::DesignOne => DESIGN_ONE,
            TemplateKey::DesignTwo => DESIGN_TWO,
            TemplateKey::DesignThree => DESIGN_THREE,
            TemplateKey::DesignFour => DESIGN_FOUR,
            TemplateKey::DesignFive => DESIGN_FIVE,
            TemplateKey::DesignSix => DESIGN_SIX,
            TemplateKey::DesignSeven => DESIGN_SEVEN,
            TemplateKey::DesignEight => DESIGN_EIGHT,
            TemplateKey::DesignNine => DESIGN_NINE,
            TemplateKey::DesignTen => DESIGN_TEN,
            TemplateKey::DesignEleven => DESIGN_ELEVEN,
            TemplateKey::DesignTwelve => DESIGN_TWELVE,
            TemplateKey::DesignThirteen => DESIGN_THIRTEEN,
            TemplateKey::DesignFourteen => DESIGN_FOURTEEN,
            TemplateKey::DesignFifteen => DESIGN_FIFTEEN,
            TemplateKey::DesignSixteen => DESIGN_SIXTEEN,
            TemplateKey::DesignSeventeen => DESIGN_SEVENTEEN,
            TemplateKey::DesignEighteen => DESIGN_EIGHTEEN,
            TemplateKey::DesignNineteen => DESIGN_NINETEEN,
            TemplateKey::DesignTwenty => DESIGN_TWENTY,
            TemplateKey::DesignTwentyOne => DESIGN_TWENTY_ONE,
            TemplateKey::DesignTwentyTwo => DESIGN_TWENTY_TWO,
            TemplateKey::DesignTwentyThree
            | TemplateKey::DesignTwentyFour
            | TemplateKey::DesignTwentyFive
            | TemplateKey::DesignTwentySix => FALLBACK,
            TemplateKey::AboutBrief => ABOUT_BRIEF,
            TemplateKey::StatsGrid => STATS_GRID,
            TemplateKey::DepartmentHero => DEPARTMENT_HERO,
            TemplateKey::HodMessage => HOD_MESSAGE,
            TemplateKey::VisionMission => VISION_MISSION,
            TemplateKey::Custom(_) => FALLBACK,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_schema;

    #[test]
    fn custom_keys_fall_back_to_generic_schema() {
        let key = TemplateKey::Custom("mystery_widget".to_string());
        let schema = Catalog::get(&key);
        assert_eq!(schema[0].name, "title");
        assert_eq!(schema[1].name, "raw_json");
    }

    #[test]
    fn late_design_keys_edit_through_the_generic_schema() {
        for key in [
            TemplateKey::DesignTwentyThree,
            TemplateKey::DesignTwentyFour,
            TemplateKey::DesignTwentyFive,
            TemplateKey::DesignTwentySix,
        ] {
            let schema = Catalog::get(&key);
            assert_eq!(schema[0].name, "title");
            assert_eq!(schema[1].name, "raw_json");
        }
    }

    #[test]
    fn every_closed_key_has_a_valid_entry() {
        for key in TemplateKey::ALL {
            let schema = Catalog::get(key);
            assert!(!schema.is_empty(), "no catalog entry for {key}");
            validate_schema(schema)
                .unwrap_or_else(|e| panic!("catalog entry for {key} is invalid: {e}"));
        }
    }

    #[test]
    fn nested_list_schemas_are_reachable() {
        let swot = Catalog::get(&TemplateKey::DesignFive);
        let outer = swot.iter().find(|f| f.name == "swotData").unwrap();
        let inner = outer
            .item_schema()
            .unwrap()
            .iter()
            .find(|f| f.name == "items")
            .unwrap();
        assert_eq!(inner.item_schema().unwrap()[0].name, "text");
    }
}
