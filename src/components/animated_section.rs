use web_sys::Element;
use yew::prelude::*;

use crate::components::dom::{viewport_height, EventBinding};

/// Sections count as visible once they are this far inside the viewport.
const REVEAL_MARGIN: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting offset in pixels before the section slides into place.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 40),
            Direction::Down => (0, -40),
            Direction::Left => (40, 0),
            Direction::Right => (-40, 0),
            Direction::None => (0, 0),
        }
    }
}

pub fn is_in_view(top: f64, bottom: f64, viewport: f64) -> bool {
    top < viewport - REVEAL_MARGIN && bottom > REVEAL_MARGIN
}

fn element_in_view(node: &NodeRef) -> bool {
    node.cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            is_in_view(rect.top(), rect.bottom(), viewport_height())
        })
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    /// Seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let already_revealed = *revealed;
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |already: &bool| {
                let binding = if *already {
                    None
                } else if element_in_view(&node) {
                    revealed.set(true);
                    None
                } else {
                    EventBinding::on_window("scroll", move |_| {
                        if element_in_view(&node) {
                            revealed.set(true);
                        }
                    })
                };
                move || drop(binding)
            },
            already_revealed,
        );
    }

    let (x, y) = props.direction.offset();
    let style = if *revealed {
        format!(
            "opacity: 1; transform: translate(0, 0); transition: opacity 0.6s cubic-bezier(0.22, 1, 0.36, 1) {0}s, transform 0.6s cubic-bezier(0.22, 1, 0.36, 1) {0}s;",
            props.delay
        )
    } else {
        format!("opacity: 0; transform: translate({}px, {}px);", x, y)
    };

    html! {
        <div ref={node} class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_point_away_from_travel() {
        assert_eq!(Direction::Up.offset(), (0, 40));
        assert_eq!(Direction::Left.offset(), (40, 0));
        assert_eq!(Direction::None.offset(), (0, 0));
    }

    #[test]
    fn view_check_uses_margin() {
        assert!(is_in_view(200.0, 600.0, 800.0));
        assert!(!is_in_view(750.0, 1100.0, 800.0));
        assert!(!is_in_view(-500.0, 50.0, 800.0));
    }
}
