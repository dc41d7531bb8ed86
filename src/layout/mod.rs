//! Layout composition: wrap any view in the shell's header and footer.

use crate::markup::{Element, Node};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Something that renders from its props.
pub trait View {
    type Props;

    fn render(&self, props: &Self::Props) -> Node;
}

/// A plain render function as a [`View`]
pub struct FnView<P, F> {
    render: F,
    _props: PhantomData<fn(&P)>,
}

pub fn view_fn<P, F>(render: F) -> FnView<P, F>
where
    F: Fn(&P) -> Node,
{
    FnView {
        render,
        _props: PhantomData,
    }
}

impl<P, F> View for FnView<P, F>
where
    F: Fn(&P) -> Node,
{
    type Props = P;

    fn render(&self, props: &P) -> Node {
        (self.render)(props)
    }
}

/// Header and footer content placed around every wrapped view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chrome {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_title() -> String {
    "Chattu".to_string()
}

fn default_footer() -> String {
    "Footer".to_string()
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: default_footer(),
        }
    }
}

impl Chrome {
    pub fn header(&self) -> Node {
        Element::new("header")
            .attr("class", "app-header")
            .text(self.title.clone())
            .into()
    }

    pub fn footer(&self) -> Node {
        Element::new("footer")
            .attr("class", "app-footer")
            .text(self.footer.clone())
            .into()
    }
}

/// A view rendered between the header and footer.
///
/// Props pass straight through to the inner view.
#[derive(Debug, Clone)]
pub struct AppLayout<V> {
    chrome: Chrome,
    content: V,
}

impl<V: View> AppLayout<V> {
    pub fn inner(&self) -> &V {
        &self.content
    }
}

impl<V: View> View for AppLayout<V> {
    type Props = V::Props;

    fn render(&self, props: &Self::Props) -> Node {
        Element::new("div")
            .attr("class", "app-layout")
            .child(self.chrome.header())
            .child(self.content.render(props))
            .child(self.chrome.footer())
            .into()
    }
}

/// Wrap `content` in the given chrome.
pub fn wrap<V: View>(chrome: &Chrome, content: V) -> AppLayout<V> {
    AppLayout {
        chrome: chrome.clone(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    struct Greeting {
        name: String,
    }

    struct GreetingView;

    impl View for GreetingView {
        type Props = Greeting;

        fn render(&self, props: &Greeting) -> Node {
            Element::new("p").text(format!("Hello {}", props.name)).into()
        }
    }

    #[test]
    fn test_order_is_header_content_footer() {
        let view = wrap(&Chrome::default(), GreetingView);
        let html = view
            .render(&Greeting {
                name: "Ada".to_string(),
            })
            .to_html();
        assert_eq!(
            html,
            "<div class=\"app-layout\"><header class=\"app-header\">Chattu</header>\
             <p>Hello Ada</p><footer class=\"app-footer\">Footer</footer></div>"
        );
    }

    #[test]
    fn test_props_reach_content_unchanged() {
        let seen = RefCell::new(Vec::new());
        let content = |props: &Greeting| {
            seen.borrow_mut().push(props.clone());
            Node::text(props.name.clone())
        };
        let props = Greeting {
            name: "Grace".to_string(),
        };
        let wrapped = wrap(&Chrome::default(), view_fn(content));
        wrapped.render(&props);
        assert_eq!(seen.borrow().as_slice(), &[props]);
    }

    #[test]
    fn test_wrapped_content_matches_unwrapped_render() {
        let props = Greeting {
            name: "Linus".to_string(),
        };
        let plain = GreetingView.render(&props);
        let Node::Element(layout) = wrap(&Chrome::default(), GreetingView).render(&props) else {
            panic!("layout renders an element");
        };
        assert_eq!(layout.children[1], plain);
    }

    #[test]
    fn test_custom_chrome() {
        let chrome = Chrome {
            title: "Team".to_string(),
            footer: "© team".to_string(),
        };
        let node = wrap(&chrome, view_fn(|_: &()| Node::text("body"))).render(&());
        assert_eq!(node.text_content(), "Teambody© team");
    }

    #[test]
    fn test_layouts_nest() {
        let inner = wrap(&Chrome::default(), GreetingView);
        let outer = wrap(&Chrome::default(), inner);
        let props = Greeting {
            name: "x".to_string(),
        };
        let text = outer.render(&props).text_content();
        assert_eq!(text, "ChattuChattuHello xFooterFooter");
    }
}
