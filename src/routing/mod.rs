//! Locale-prefixed routing.
//!
//! Every user-facing path has the shape `/{locale}/{page-path}`. The matcher
//! classifies a path, the policy turns that classification into a decision,
//! and the middleware applies the decision to live requests.

mod context;
mod matcher;
mod middleware;
mod policy;

pub use context::RequestContext;
pub use matcher::{classify, is_excluded, RouteMatch};
pub use middleware::{route_locale, LocaleRouting};
pub use policy::{parse_redirect_status, Decision, LocalePolicy};
