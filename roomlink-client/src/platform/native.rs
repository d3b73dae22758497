/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Native (non-browser) platform primitives.
//!
//! There is no long-lived executor on this target — the widget itself only
//! ever runs in the browser. The future is driven to completion inline, which
//! is what the unit tests (whose futures are already-resolved fakes) expect.

use std::future::Future;

pub fn spawn<F: Future<Output = ()> + 'static>(future: F) {
    futures::executor::block_on(future);
}
