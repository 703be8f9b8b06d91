//! Anchor markup helper for router-aware links.
//!
//! The interception protocol recognizes plain anchors; this builder
//! renders them with the attributes the protocol consumes, so app shells
//! and tests generate markup consistent with routing behavior.

/// A link that the router will navigate without a full page reload.
///
/// External links render with the `data-external` opt-out marker plus
/// `target="_blank"` and `rel="noopener noreferrer"`, and are never
/// intercepted.
///
/// # Example
///
/// ```
/// use musette::Link;
///
/// let html = Link::new("/contact", "Contact").class("nav-link").render_html();
/// assert_eq!(html, "<a href=\"/contact\" class=\"nav-link\">Contact</a>");
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	/// The destination path.
	to: String,
	/// The link text.
	content: String,
	/// Additional CSS classes.
	class: Option<String>,
	/// Whether the link opts out of interception.
	external: bool,
	/// Custom attributes.
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			class: None,
			external: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether this is an external link.
	pub fn external(mut self, external: bool) -> Self {
		self.external = external;
		self
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns whether this is an external link.
	pub fn is_external(&self) -> bool {
		self.external
	}

	/// Renders the anchor as an HTML string.
	pub fn render_html(&self) -> String {
		let mut html = format!("<a href=\"{}\"", escape_attr(&self.to));

		if let Some(ref class) = self.class {
			html.push_str(&format!(" class=\"{}\"", escape_attr(class)));
		}

		if self.external {
			html.push_str(" data-external=\"true\"");
			html.push_str(" target=\"_blank\"");
			html.push_str(" rel=\"noopener noreferrer\"");
		}

		for (name, value) in &self.attrs {
			html.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
		}

		html.push('>');
		html.push_str(&escape_text(&self.content));
		html.push_str("</a>");
		html
	}
}

fn escape_attr(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

fn escape_text(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_link_new() {
		let link = Link::new("/users/", "Users");
		assert_eq!(link.to(), "/users/");
		assert_eq!(link.content(), "Users");
		assert!(!link.is_external());
	}

	#[test]
	fn test_link_builder() {
		let html = Link::new("/admin/", "Admin")
			.class("nav-link")
			.attr("aria-label", "Admin Panel")
			.render_html();

		assert!(html.contains("href=\"/admin/\""));
		assert!(html.contains("class=\"nav-link\""));
		assert!(html.contains("aria-label=\"Admin Panel\""));
		assert!(!html.contains("data-external"));
	}

	#[test]
	fn test_link_external() {
		let html = Link::new("https://example.com", "Example")
			.external(true)
			.render_html();

		assert!(html.contains("data-external=\"true\""));
		assert!(html.contains("target=\"_blank\""));
		assert!(html.contains("rel=\"noopener noreferrer\""));
	}

	#[test]
	fn test_link_escapes_markup() {
		let html = Link::new("/q?a=1&b=2", "<b>bold</b>").render_html();
		assert!(html.contains("href=\"/q?a=1&amp;b=2\""));
		assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
	}
}
