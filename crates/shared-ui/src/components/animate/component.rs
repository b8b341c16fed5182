use dioxus::prelude::*;

use crate::motion::{active_variant, VariantTable};

/// Resolves after the browser has painted at least one frame. The second
/// `requestAnimationFrame` fires only once the first one's frame is on screen.
const NEXT_PAINT: &str = r#"
    await new Promise((resolve) => requestAnimationFrame(() => requestAnimationFrame(resolve)));
    return true;
"#;

/// A `div` that transitions between named [`VariantTable`] states.
///
/// `initial` is shown on the first render only; the element settles into
/// `animate` one painted frame after mounting and never returns to
/// `initial` while it stays mounted. `while_hover`, when set, applies while the pointer is over the
/// element and reverts on exit.
#[derive(Props, Clone, PartialEq)]
pub struct MotionProps {
    pub variants: VariantTable,
    #[props(default)]
    pub initial: Option<&'static str>,
    pub animate: &'static str,
    #[props(default)]
    pub while_hover: Option<&'static str>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Motion(props: MotionProps) -> Element {
    let starts_settled = props.initial.is_none();
    let mut mounted = use_signal(move || starts_settled);
    let mut hovered = use_signal(|| false);
    let has_hover = props.while_hover.is_some();

    // Runs once per mount; peek so later renders never re-trigger it.
    // Waiting for a paint keeps the initial variant on screen long enough
    // for the transition to start from it.
    use_effect(move || {
        if *mounted.peek() {
            return;
        }
        spawn(async move {
            let _ = document::eval(NEXT_PAINT).await;
            mounted.set(true);
        });
    });

    let variant = active_variant(
        mounted(),
        hovered(),
        props.initial,
        props.animate,
        props.while_hover,
    );
    let style = props.variants.style(variant);

    let base = vec![Attribute::new("class", "motion", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        div {
            style: "{style}",
            "data-variant": variant,
            onmouseenter: move |_| {
                if has_hover {
                    hovered.set(true);
                }
            },
            onmouseleave: move |_| {
                if has_hover {
                    hovered.set(false);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionVariant;

    const FADE: VariantTable = VariantTable(&[
        (
            "hidden",
            MotionVariant::NEUTRAL.with_opacity(0.0).with_y(-20.0),
        ),
        ("visible", MotionVariant::NEUTRAL.with_duration(0.5)),
    ]);

    const GROW: VariantTable = VariantTable(&[
        ("rest", MotionVariant::NEUTRAL.with_duration(0.2)),
        ("hover", MotionVariant::NEUTRAL.with_scale(1.05).with_duration(0.2)),
    ]);

    #[component]
    fn FadingIn() -> Element {
        rsx! {
            Motion { variants: FADE, initial: "hidden", animate: "visible", "hello" }
        }
    }

    #[component]
    fn Growing() -> Element {
        rsx! {
            Motion { variants: GROW, animate: "rest", while_hover: "hover", "menu" }
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn first_render_uses_initial_variant() {
        let html = render(FadingIn);
        assert!(html.contains(r#"data-variant="hidden""#), "{html}");
        assert!(html.contains("opacity: 0;"), "{html}");
        assert!(html.contains("hello"));
    }

    #[test]
    fn without_initial_starts_at_rest() {
        let html = render(Growing);
        assert!(html.contains(r#"data-variant="rest""#), "{html}");
        assert!(html.contains("scale(1)"), "{html}");
    }

    #[test]
    fn settling_waits_for_a_painted_frame() {
        assert_eq!(NEXT_PAINT.matches("requestAnimationFrame").count(), 2);
        assert!(NEXT_PAINT.contains("await"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(FadingIn), render(FadingIn));
    }
}
