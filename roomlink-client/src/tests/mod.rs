//! Unit tests driving the session controller against the fake engine and
//! token provider.
