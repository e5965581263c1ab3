//! Named stanza forms and container directives
//!
//! Classical forms map to a fixed stanza spec (a musaddas is 4+2, a
//! mukhammas is 5, ...). A verse container selects its layout either by one
//! of these class names or by an explicit `data-pattern` / `data-mixed`
//! attribute. The layout engine itself never sees form names.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::models::{ColumnMode, CopyMode, GroupPattern, MixedEntry, MixedPattern, StanzaSpec};
use crate::parse::pattern::{parse_group_pattern, parse_mixed_pattern};
use crate::text::Element;

/// Attribute holding a fixed pattern, e.g. `4+2`
pub const PATTERN_ATTRIBUTE: &str = "data-pattern";
/// Attribute holding a mixed pattern, e.g. `4:2col,2:1col`
pub const MIXED_ATTRIBUTE: &str = "data-mixed";
/// Attribute selecting copy affordances
pub const COPY_ATTRIBUTE: &str = "data-copy";

/// Form class used for containers laid out by `data-pattern`
pub const PATTERN_FORM: &str = "pattern";
/// Form class used for containers laid out by `data-mixed`
pub const MIXED_FORM: &str = "mixed";

/// A named stanza form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StanzaForm {
    pub name: &'static str,
    pub spec: StanzaSpec,
}

fn fixed(name: &'static str, sizes: &[usize]) -> StanzaForm {
    StanzaForm {
        name,
        spec: StanzaSpec::Fixed(GroupPattern::new(sizes.to_vec())),
    }
}

fn mixed(name: &'static str, entries: &[(usize, ColumnMode)]) -> StanzaForm {
    StanzaForm {
        name,
        spec: StanzaSpec::Mixed(MixedPattern::new(
            entries
                .iter()
                .map(|&(count, columns)| MixedEntry::new(count, columns))
                .collect(),
        )),
    }
}

/// Registered forms, in lookup order
static FORMS: Lazy<Vec<StanzaForm>> = Lazy::new(|| {
    vec![
        fixed("sher", &[2]),
        mixed("sher2", &[(2, ColumnMode::Double)]),
        fixed("qata", &[4]),
        fixed("rubai", &[4]),
        fixed("mukhammas", &[5]),
        fixed("musaddas", &[4, 2]),
        fixed("musaddas-6", &[6]),
        mixed(
            "musaddas-mixed",
            &[(4, ColumnMode::Double), (2, ColumnMode::Single)],
        ),
    ]
});

/// Look up a form by name
pub fn form(name: &str) -> Option<&'static StanzaForm> {
    FORMS.iter().find(|f| f.name == name)
}

/// Names of all registered forms
pub fn form_names() -> Vec<&'static str> {
    FORMS.iter().map(|f| f.name).collect()
}

/// CSS selector matching every verse container
pub fn container_selector() -> String {
    let mut parts: Vec<String> = FORMS.iter().map(|f| format!(".{}", f.name)).collect();
    parts.push(format!("[{}]", PATTERN_ATTRIBUTE));
    parts.push(format!("[{}]", MIXED_ATTRIBUTE));
    parts.join(", ")
}

/// Layout-relevant attributes of a container element
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerDirectives {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub mixed: Option<String>,
    #[serde(default)]
    pub copy: Option<String>,
}

impl ContainerDirectives {
    pub fn from_element(element: &Element) -> Self {
        Self {
            classes: element.classes().map(str::to_string).collect(),
            pattern: element.attribute(PATTERN_ATTRIBUTE).map(str::to_string),
            mixed: element.attribute(MIXED_ATTRIBUTE).map(str::to_string),
            copy: element.attribute(COPY_ATTRIBUTE).map(str::to_string),
        }
    }

    /// First class naming a registered form
    pub fn form_class(&self) -> Option<&'static StanzaForm> {
        self.classes.iter().find_map(|c| form(c))
    }

    pub fn is_verse_container(&self) -> bool {
        self.mixed.is_some() || self.pattern.is_some() || self.form_class().is_some()
    }

    /// Copy mode requested by `data-copy`, or `default` when absent
    pub fn copy_mode(&self, default: CopyMode) -> CopyMode {
        match self.copy.as_deref() {
            Some(value) => CopyMode::from_attribute(Some(value)),
            None => default,
        }
    }
}

/// Whether an element is a verse container
pub fn is_verse_container(element: &Element) -> bool {
    ContainerDirectives::from_element(element).is_verse_container()
}

/// A container's resolved layout request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStanza {
    /// Class put on the rendered tables
    pub form: String,
    pub spec: StanzaSpec,
}

/// Resolve directives to a stanza spec
///
/// Precedence: `data-mixed`, then `data-pattern`, then the first form class.
/// Returns `None` for elements that are not verse containers.
pub fn resolve(directives: &ContainerDirectives, diagnostics: &mut Diagnostics) -> Option<ResolvedStanza> {
    if let Some(mixed) = &directives.mixed {
        return Some(ResolvedStanza {
            form: MIXED_FORM.to_string(),
            spec: StanzaSpec::Mixed(parse_mixed_pattern(mixed, diagnostics)),
        });
    }
    if let Some(pattern) = &directives.pattern {
        return Some(ResolvedStanza {
            form: PATTERN_FORM.to_string(),
            spec: StanzaSpec::Fixed(parse_group_pattern(pattern, diagnostics)),
        });
    }
    directives.form_class().map(|f| ResolvedStanza {
        form: f.name.to_string(),
        spec: f.spec.clone(),
    })
}
