//! Tag identities and their attribute tables
//!
//! Every tag's attributes are declared once, here, as a static table of
//! [`AttributeSpec`]s. The table drives both validation and the generic part
//! of rendering, so adding an attribute with a style or `data-*` mapping needs
//! no renderer change.

use compat_ui_core::{AttributeSpec, Result, UiError};

/// Horizontal alignment values
pub const ALIGNMENTS: &[&str] = &["left", "center", "right"];

/// Grid selection modes
pub const SELECT_MODES: &[&str] = &["none", "single", "multi"];

/// Grid column value types
pub const COLUMN_TYPES: &[&str] = &["string", "numeric", "date", "boolean", "currency", "image"];

/// Layout kinds
pub const LAYOUT_TYPES: &[&str] = &["border", "tab", "accordion", "hbox", "vbox"];

/// Border layout positions, in rendering order
pub const BORDER_POSITIONS: &[&str] = &["top", "left", "center", "right", "bottom"];

/// CSS overflow values
pub const OVERFLOW_VALUES: &[&str] = &["visible", "hidden", "scroll", "auto"];

/// HTTP methods accepted by grid-update
pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Elements a div tag may render as
pub const DIV_TAG_NAMES: &[&str] = &[
	"div", "span", "p", "section", "article", "aside", "header", "footer", "main", "nav",
];

/// Asset bundles ajax-import can include
pub const IMPORT_TAGS: &[&str] = &["layout", "div", "grid", "tooltip", "pod", "ajaxproxy"];

/// Every tag the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
	Grid,
	GridColumn,
	GridRow,
	GridUpdate,
	Layout,
	LayoutArea,
	Pod,
	Div,
	AjaxProxy,
	AjaxImport,
}

impl TagKind {
	/// Resolves a tag name as written by the host
	///
	/// Matching ignores ASCII case, `-` and `_`, so `grid-column`,
	/// `GridColumn` and `gridcolumn` are the same tag.
	///
	/// # Examples
	///
	/// ```
	/// use compat_ui_components::tags::TagKind;
	///
	/// assert_eq!(TagKind::parse("grid-column").unwrap(), TagKind::GridColumn);
	/// assert_eq!(TagKind::parse("LayoutArea").unwrap(), TagKind::LayoutArea);
	/// assert!(TagKind::parse("tooltip").is_err());
	/// ```
	pub fn parse(name: &str) -> Result<Self> {
		let normalized: String = name
			.chars()
			.filter(|c| *c != '-' && *c != '_')
			.map(|c| c.to_ascii_lowercase())
			.collect();

		match normalized.as_str() {
			"grid" => Ok(Self::Grid),
			"gridcolumn" => Ok(Self::GridColumn),
			"gridrow" => Ok(Self::GridRow),
			"gridupdate" => Ok(Self::GridUpdate),
			"layout" => Ok(Self::Layout),
			"layoutarea" => Ok(Self::LayoutArea),
			"pod" => Ok(Self::Pod),
			"div" => Ok(Self::Div),
			"ajaxproxy" => Ok(Self::AjaxProxy),
			"ajaximport" => Ok(Self::AjaxImport),
			_ => Err(UiError::UnknownTag(name.to_string())),
		}
	}

	/// Name used in error messages
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Grid => "Grid",
			Self::GridColumn => "GridColumn",
			Self::GridRow => "GridRow",
			Self::GridUpdate => "GridUpdate",
			Self::Layout => "Layout",
			Self::LayoutArea => "LayoutArea",
			Self::Pod => "Pod",
			Self::Div => "Div",
			Self::AjaxProxy => "AjaxProxy",
			Self::AjaxImport => "AjaxImport",
		}
	}

	/// Prefix of auto-generated ids, for tags that render an addressable root
	pub fn id_prefix(&self) -> Option<&'static str> {
		match self {
			Self::Grid => Some("grid"),
			Self::GridUpdate => Some("gridupdate"),
			Self::Layout => Some("layout"),
			Self::LayoutArea => Some("layoutarea"),
			Self::Pod => Some("pod"),
			Self::Div => Some("div"),
			Self::GridColumn | Self::GridRow | Self::AjaxProxy | Self::AjaxImport => None,
		}
	}

	/// The parent a child tag must be nested in
	pub fn required_parent(&self) -> Option<TagKind> {
		match self {
			Self::GridColumn | Self::GridRow => Some(Self::Grid),
			Self::LayoutArea => Some(Self::Layout),
			_ => None,
		}
	}

	/// The attribute table of this tag
	pub fn attributes(&self) -> &'static [AttributeSpec] {
		match self {
			Self::Grid => GRID_ATTRIBUTES,
			Self::GridColumn => GRID_COLUMN_ATTRIBUTES,
			Self::GridRow => &[],
			Self::GridUpdate => GRID_UPDATE_ATTRIBUTES,
			Self::Layout => LAYOUT_ATTRIBUTES,
			Self::LayoutArea => LAYOUT_AREA_ATTRIBUTES,
			Self::Pod => POD_ATTRIBUTES,
			Self::Div => DIV_ATTRIBUTES,
			Self::AjaxProxy => AJAX_PROXY_ATTRIBUTES,
			Self::AjaxImport => AJAX_IMPORT_ATTRIBUTES,
		}
	}
}

impl std::fmt::Display for TagKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.display_name())
	}
}

/// `grid`
pub const GRID_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::required("name").data("data-name"),
	AttributeSpec::optional("id"),
	AttributeSpec::optional("class"),
	AttributeSpec::optional("style"),
	AttributeSpec::optional("height").style("height"),
	AttributeSpec::optional("width").style("width"),
	AttributeSpec::optional("sortable").flag("bx-grid-sortable", Some("data-sortable")),
	AttributeSpec::optional("editable").flag("bx-grid-editable", Some("data-editable")),
	AttributeSpec::optional("selectMode")
		.one_of(SELECT_MODES)
		.default_value("none")
		.data("data-select-mode"),
	AttributeSpec::optional("multirowselect").boolean(),
	AttributeSpec::optional("pageSize")
		.positive_integer()
		.data("data-page-size"),
	AttributeSpec::optional("page").positive_integer(),
	AttributeSpec::optional("showHeaders")
		.boolean()
		.default_value("true"),
	AttributeSpec::optional("stripeRows")
		.flag("bx-grid-striped", None)
		.default_value("true"),
	AttributeSpec::optional("bgColor").style("background-color"),
	AttributeSpec::optional("textColor").style("color"),
	AttributeSpec::optional("font").style("font-family"),
	AttributeSpec::optional("fontSize").style("font-size"),
	AttributeSpec::optional("bold").style_flag("font-weight", "bold"),
	AttributeSpec::optional("italic").style_flag("font-style", "italic"),
	AttributeSpec::optional("headerBgColor"),
	AttributeSpec::optional("headerTextColor"),
	AttributeSpec::optional("selectColor").data("data-select-color"),
	AttributeSpec::optional("onLoad").handler(),
	AttributeSpec::optional("onEdit").handler(),
	AttributeSpec::optional("onSort").handler(),
	AttributeSpec::optional("onChange").handler(),
];

/// `gridcolumn`
pub const GRID_COLUMN_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::required("name"),
	AttributeSpec::optional("header"),
	AttributeSpec::optional("width"),
	AttributeSpec::optional("dataAlign").one_of(ALIGNMENTS),
	AttributeSpec::optional("headerAlign").one_of(ALIGNMENTS),
	AttributeSpec::optional("type")
		.one_of(COLUMN_TYPES)
		.default_value("string"),
	AttributeSpec::optional("sortable").boolean(),
	AttributeSpec::optional("editable").boolean(),
	AttributeSpec::optional("display")
		.boolean()
		.default_value("true"),
	AttributeSpec::optional("values"),
	AttributeSpec::optional("valuesDisplay"),
	AttributeSpec::optional("valuesDelimiter").default_value(","),
	AttributeSpec::optional("href"),
	AttributeSpec::optional("target"),
	AttributeSpec::optional("numberFormat"),
	AttributeSpec::optional("dateFormat"),
];

/// `gridupdate`
pub const GRID_UPDATE_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::required("grid"),
	AttributeSpec::optional("id"),
	AttributeSpec::optional("dataSource"),
	AttributeSpec::optional("tableName"),
	AttributeSpec::optional("tableOwner"),
	AttributeSpec::optional("tableQualifier"),
	AttributeSpec::optional("username"),
	AttributeSpec::optional("password"),
	AttributeSpec::optional("keyOnly")
		.boolean()
		.default_value("false"),
	AttributeSpec::optional("url"),
	AttributeSpec::optional("method")
		.one_of(HTTP_METHODS)
		.default_value("POST"),
	AttributeSpec::optional("onSuccess").handler(),
	AttributeSpec::optional("onError").handler(),
];

/// `layout`
pub const LAYOUT_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::required("type")
		.one_of(LAYOUT_TYPES)
		.class_prefix("bx-layout-"),
	AttributeSpec::optional("id"),
	AttributeSpec::optional("name").data("data-name"),
	AttributeSpec::optional("class"),
	AttributeSpec::optional("style"),
	AttributeSpec::optional("height").style("height"),
	AttributeSpec::optional("width").style("width"),
	AttributeSpec::optional("align")
		.one_of(&["left", "center", "right", "top", "middle", "bottom", "stretch"])
		.class_prefix("bx-layout-align-"),
	AttributeSpec::optional("fillHeight").flag("bx-layout-fill-height", None),
	AttributeSpec::optional("fitToWindow").flag("bx-layout-fit-window", None),
	AttributeSpec::optional("tabPosition")
		.one_of(&["top", "bottom", "left", "right"])
		.data("data-tab-position"),
	AttributeSpec::optional("onChange").handler(),
];

/// `layoutarea`
pub const LAYOUT_AREA_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::optional("id"),
	AttributeSpec::optional("name"),
	AttributeSpec::optional("title"),
	AttributeSpec::optional("position"),
	AttributeSpec::optional("class"),
	AttributeSpec::optional("style"),
	AttributeSpec::optional("size"),
	AttributeSpec::optional("minsize"),
	AttributeSpec::optional("maxsize"),
	AttributeSpec::optional("splitter").boolean(),
	AttributeSpec::optional("collapsible").boolean(),
	AttributeSpec::optional("initcollapsed").boolean(),
	AttributeSpec::optional("selected").boolean(),
	AttributeSpec::optional("disabled").boolean(),
	AttributeSpec::optional("align").one_of(ALIGNMENTS),
	AttributeSpec::optional("overflow").one_of(OVERFLOW_VALUES),
	AttributeSpec::optional("source"),
	AttributeSpec::optional("onBindError").handler(),
];

/// `pod`
pub const POD_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::optional("id"),
	AttributeSpec::optional("name").data("data-name"),
	AttributeSpec::optional("title"),
	AttributeSpec::optional("class"),
	AttributeSpec::optional("style"),
	AttributeSpec::optional("height").style("height"),
	AttributeSpec::optional("width").style("width"),
	AttributeSpec::optional("overflow")
		.one_of(OVERFLOW_VALUES)
		.style("overflow"),
	AttributeSpec::optional("headerStyle"),
	AttributeSpec::optional("bodyStyle"),
	AttributeSpec::optional("source").data("data-source"),
	AttributeSpec::optional("onBindError").handler(),
];

/// `div`
pub const DIV_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::optional("id"),
	AttributeSpec::optional("class"),
	AttributeSpec::optional("style"),
	AttributeSpec::optional("tagName")
		.one_of(DIV_TAG_NAMES)
		.default_value("div"),
	AttributeSpec::optional("bind").data("data-bind"),
	AttributeSpec::optional("bindOnLoad")
		.boolean()
		.default_value("true"),
	AttributeSpec::optional("onBindError").handler(),
];

/// `ajaxproxy`
pub const AJAX_PROXY_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::optional("cfc"),
	AttributeSpec::optional("jsclassname").identifier(),
	AttributeSpec::optional("methods"),
	AttributeSpec::optional("bind"),
	AttributeSpec::optional("onSuccess").handler(),
	AttributeSpec::optional("onError").handler(),
];

/// `ajaximport`
pub const AJAX_IMPORT_ATTRIBUTES: &[AttributeSpec] = &[
	AttributeSpec::optional("tags"),
	AttributeSpec::optional("cssSrc"),
	AttributeSpec::optional("scriptSrc"),
	AttributeSpec::optional("params"),
];

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("grid", TagKind::Grid)]
	#[case("Grid_Update", TagKind::GridUpdate)]
	#[case("ajax-import", TagKind::AjaxImport)]
	#[case("AJAXPROXY", TagKind::AjaxProxy)]
	#[case("gridrow", TagKind::GridRow)]
	fn test_parse_tag_names(#[case] name: &str, #[case] expected: TagKind) {
		assert_eq!(TagKind::parse(name).unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_tag() {
		assert_eq!(
			TagKind::parse("tooltip").unwrap_err().to_string(),
			"Unknown tag: tooltip"
		);
	}

	#[rstest]
	fn test_attribute_names_are_unique_per_tag() {
		let all = [
			TagKind::Grid,
			TagKind::GridColumn,
			TagKind::GridUpdate,
			TagKind::Layout,
			TagKind::LayoutArea,
			TagKind::Pod,
			TagKind::Div,
			TagKind::AjaxProxy,
			TagKind::AjaxImport,
		];
		for tag in all {
			let specs = tag.attributes();
			for (i, spec) in specs.iter().enumerate() {
				assert!(
					specs[i + 1..]
						.iter()
						.all(|other| !other.name.eq_ignore_ascii_case(spec.name)),
					"{tag} declares {} twice",
					spec.name
				);
			}
		}
	}

	#[rstest]
	fn test_children_require_parents() {
		assert_eq!(TagKind::GridColumn.required_parent(), Some(TagKind::Grid));
		assert_eq!(TagKind::GridRow.required_parent(), Some(TagKind::Grid));
		assert_eq!(TagKind::LayoutArea.required_parent(), Some(TagKind::Layout));
		assert_eq!(TagKind::Pod.required_parent(), None);
	}
}
