//! Browser entry point wiring the chat client into a server-rendered page.
//!
//! The page owns the layout: message container, compose form and identity
//! elements are rendered by the server. Startup only reads those elements,
//! mounts the message list into its container and binds the form submit and
//! unload listeners. Pages without the container are left untouched.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::client_view::ChatClientView;
#[cfg(feature = "hydrate")]
use crate::net::channel::EventSender;
#[cfg(feature = "hydrate")]
use crate::util::clock::LocalClock;
#[cfg(feature = "hydrate")]
use crate::util::page::DocumentPage;

#[cfg(feature = "hydrate")]
type BrowserView = ChatClientView<EventSender, LocalClock>;

/// Attach the chat client to the current page.
#[cfg(feature = "hydrate")]
pub fn start() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::message_list::MessageList;
    use crate::config::{ClientConfig, MESSAGES_ID};
    use crate::net::socket;
    use crate::state::chat::ChatState;

    let Some(page) = DocumentPage::current() else {
        return;
    };
    let Some(config) = ClientConfig::from_page(&page) else {
        log::debug!("no #{MESSAGES_ID} on this page; chat client inactive");
        return;
    };
    let Some(container) = page
        .element(MESSAGES_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let (sender, rx) = socket::outgoing_queue();
    let client = Rc::new(ChatClientView::new(config.identity.clone(), sender, LocalClock));
    let chat = RwSignal::new(ChatState::default());

    // Drop the server-rendered placeholder; ChatState carries its own.
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <MessageList chat=chat/> }).forget();

    bind_compose_form(&page, Rc::clone(&client));
    bind_teardown(Rc::clone(&client));

    let location = web_sys::window().map(|w| w.location());
    let href = location.as_ref().and_then(|l| l.href().ok()).unwrap_or_default();
    let host = location.as_ref().and_then(|l| l.host().ok()).unwrap_or_default();
    socket::spawn_socket(config.socket_url(&href, &host), rx, client, chat);
}

#[cfg(feature = "hydrate")]
fn bind_compose_form(page: &DocumentPage, client: Rc<BrowserView>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::config::{FORM_ID, INPUT_ID};

    let form = page.element(FORM_ID);
    let input = page
        .element(INPUT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
    let (Some(form), Some(input)) = (form, input) else {
        log::warn!("chat page has no #{FORM_ID} with #{INPUT_ID}; sending disabled");
        return;
    };

    let on_submit = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        let mut draft = input.value();
        if client.submit(&mut draft).is_some() {
            input.set_value(&draft);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}

#[cfg(feature = "hydrate")]
fn bind_teardown(client: Rc<BrowserView>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let on_unload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        client.teardown();
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
    on_unload.forget();
}
