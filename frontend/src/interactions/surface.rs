/// Position of an element relative to the document, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetBox {
    pub top: f64,
    pub height: f64,
}

/// An element whose state classes and inline styles the controllers drive.
///
/// Mutations never fail from the caller's point of view: a surface that
/// cannot apply a change just leaves the page as it was.
pub trait Surface {
    fn set_style(&self, property: &str, value: &str);
    /// Drops the inline value so the stylesheet applies again.
    fn remove_style(&self, property: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn offset_box(&self) -> OffsetBox;

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}
