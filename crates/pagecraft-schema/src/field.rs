use serde::Serialize;

///
/// FieldDescriptor
///
/// One editable property in a section's configuration. Descriptors are pure
/// data; the form session interprets them and the catalog stores them as
/// const tables, so everything here is `'static` and `const`-constructible.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text { placeholder: None },
        }
    }

    pub const fn text_with(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text {
                placeholder: Some(placeholder),
            },
        }
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Textarea { placeholder: None },
        }
    }

    pub const fn textarea_with(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Textarea {
                placeholder: Some(placeholder),
            },
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select { options },
        }
    }

    pub const fn color(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Color,
        }
    }

    pub const fn image(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Image,
        }
    }

    pub const fn list(
        name: &'static str,
        label: &'static str,
        item_schema: &'static [Self],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::List { item_schema },
        }
    }

    pub const fn json(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Json,
        }
    }

    pub const fn json_full(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::JsonFull,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.kind, FieldKind::List { .. })
    }

    /// Child schema for `List` fields, `None` for everything else.
    #[must_use]
    pub const fn item_schema(&self) -> Option<&'static [Self]> {
        match self.kind {
            FieldKind::List { item_schema } => Some(item_schema),
            _ => None,
        }
    }
}

///
/// FieldKind
///
/// `List` makes the type recursive: a list's item schema may itself contain
/// lists, to `MAX_NESTING_DEPTH`. `Json` binds one key as raw editable
/// JSON; `JsonFull` binds the whole data object.
///

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum FieldKind {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
    Textarea {
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<&'static str>,
    },
    Number,
    Select {
        options: &'static [&'static str],
    },
    Color,
    Image,
    List {
        #[serde(rename = "itemSchema")]
        item_schema: &'static [FieldDescriptor],
    },
    Json,
    JsonFull,
}

/// Look up a descriptor by field name at one nesting level.
#[must_use]
pub fn find_field<'a>(
    schema: &'a [FieldDescriptor],
    name: &str,
) -> Option<&'a FieldDescriptor> {
    schema.iter().find(|f| f.name == name)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTON_ITEM: &[FieldDescriptor] = &[
        FieldDescriptor::text("text", "Button Text"),
        FieldDescriptor::text("link", "Link URL"),
    ];

    #[test]
    fn list_exposes_item_schema() {
        let field = FieldDescriptor::list("buttons", "Buttons List", BUTTON_ITEM);
        assert!(field.is_list());
        assert_eq!(field.item_schema().unwrap().len(), 2);
        assert!(FieldDescriptor::text("title", "Title").item_schema().is_none());
    }

    #[test]
    fn kind_serializes_with_type_tag() {
        let field = FieldDescriptor::text_with("gradient", "Gradient Class", "bg-gradient-to-r ...");
        let json = serde_json::to_value(field).unwrap();
        assert_eq!(json["name"], "gradient");
        assert_eq!(json["kind"]["type"], "text");
        assert_eq!(json["kind"]["placeholder"], "bg-gradient-to-r ...");
    }
}
