use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll};

use crate::interactions::dom;
use crate::interactions::menu::{self, MenuEvent};
use crate::interactions::scroll::NavbarState;

/// Fixed top navigation. Scroll position drives the opaque background and
/// the hide-on-scroll classes; the hamburger toggle collapses the links on
/// narrow screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let (state, set_state) = signal(NavbarState::default());
    let (_scroll_x, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = scroll_y.get();
        set_state.update(|s| *s = s.handle_scroll(offset));
    });

    let (open, set_open) = signal(false);
    let menu_ref = NodeRef::<html::Div>::new();
    // the wrapper holds both the toggle and the panel, so a click landing
    // outside it is outside both
    let _ = on_click_outside(menu_ref, move |_| {
        set_open.update(|o| *o = menu::handle_click(*o, MenuEvent::Outside));
    });

    view! {
        <nav
            class="navbar"
            class:scrolled=move || state.get().opaque
            class:nav-hidden=move || state.get().hidden
        >
            <a class="logo" href="/">
                "ashwinkumar.dev"
            </a>
            <div node_ref=menu_ref class="nav-menu">
                <button
                    class="menu-toggle"
                    class:active=move || open.get()
                    aria-label="Toggle navigation menu"
                    on:click=move |_| {
                        set_open.update(|o| *o = menu::handle_click(*o, MenuEvent::Toggle));
                    }
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <ul class="nav-links" class:active=move || open.get()>
                    <li>
                        <NavLink href="#home" label="Home" />
                    </li>
                    <li>
                        <NavLink href="#skills" label="Skills" />
                    </li>
                    <li>
                        <NavLink href="#experience" label="Experience" />
                    </li>
                    <li>
                        <NavLink href="#education" label="Education" />
                    </li>
                    <li>
                        <NavLink href="#contact" label="Contact" />
                    </li>
                </ul>
            </div>
        </nav>
    }
}

/// In-page anchor that swaps the default jump for a smooth scroll stopping
/// short of the fixed navbar. Links without a `#` prefix keep their native
/// behavior.
#[component]
pub fn NavLink(
    href: &'static str,
    label: &'static str,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(id) = href.strip_prefix('#') {
            ev.prevent_default();
            dom::scroll_to_anchor(id);
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {label}
        </a>
    }
}
