//! Small convenience helpers over a [`Host`]: element selection and
//! construction, class edits, event listeners and delegation, debounce and
//! throttle wrappers, a ready callback, CSS custom properties and a JSON
//! fetch.
//!
//! There is no global document. Every helper takes the host explicitly, and
//! every callback receives `&mut Host` when it runs.
//!
//! ```
//! use domkit::{Host, ManualClock, el, delegate, qs};
//!
//! let mut host = Host::with_clock(ManualClock::default());
//! let list = el(&mut host, "ul", [("class", "menu")], [] as [&str; 0]).unwrap();
//! let item = el(&mut host, "li", [("className", "item")], ["first"]).unwrap();
//! let body = host.document().body().unwrap();
//! host.document_mut().append_child(list, item).unwrap();
//! host.document_mut().append_child(body, list).unwrap();
//!
//! assert_eq!(qs(&host, "ul.menu > li").unwrap(), Some(item));
//! let _detach = delegate(&mut host, list, "click", "li", |_, _, matched| {
//!     println!("clicked {matched}");
//! })
//! .unwrap();
//! ```

mod class;
mod css_var;
mod delegate;
mod element;
mod listen;
mod rate_limit;
mod ready;
mod select;

pub use class::{add_class, has_class, remove_class, toggle_class};
pub use css_var::{css_var, set_css_var};
pub use delegate::delegate;
pub use element::{Child, Prop, el, remove};
pub use listen::{Detach, on, on_with, once};
pub use rate_limit::{Debounced, Throttled, debounce, throttle};
pub use ready::ready;
pub use select::{qs, qs_within, qsa, qsa_within};

pub use css::SelectorError;
pub use dom::DomError;
pub use platform::{
    Clock, Event, EventInit, EventPhase, Host, HostConfig, HostError, ListenerOptions, ManualClock,
    NodeId, ReadyState, SystemClock,
};

#[cfg(feature = "fetch")]
pub use net::{FetchError, FetchOptions, fetch_json, fetch_json_as, fetch_json_in_background};
