// Module layout (Clean Architecture style)
// - bootstrap: configuration, composition and process lifecycle
// - infrastructure: contact store adapters (Postgres, in-memory)
// - presentation: HTTP handlers, routing and error translation
// - application: ports and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
