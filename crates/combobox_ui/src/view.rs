//! Leptos bridge turning [`Markup`] trees into mounted views.

use leptos::html::{custom, Custom};
use leptos::*;

use crate::markup::{Element, Markup};

impl IntoView for Markup {
    fn into_view(self) -> View {
        match self {
            Self::Text(text) => text.into_view(),
            Self::Element(element) => element.into_view(),
            Self::Fragment(children) => children
                .into_iter()
                .map(IntoView::into_view)
                .collect_view(),
        }
    }
}

impl IntoView for Element {
    fn into_view(self) -> View {
        // SVG content must be created in the SVG namespace; let the parser do it.
        if self.tag == "svg" {
            let inner = self.inner_html();
            let mut node = leptos::svg::svg();
            for (name, value) in self.attrs {
                node = node.attr(name, value);
            }
            return node.inner_html(inner).into_view();
        }

        let mut node = custom(Custom::new(self.tag));
        for (name, value) in self.attrs {
            node = node.attr(name, value);
        }
        for child in self.children {
            node = node.child(child);
        }
        node.into_view()
    }
}

#[component]
/// Mounts a prebuilt markup tree.
pub fn MarkupView(
    /// Tree to render.
    markup: Markup,
) -> impl IntoView {
    markup
}
