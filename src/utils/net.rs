//! Network probing for `ping`.
//!
//! A probe is an opaque (`no-cors`) GET of `https://<address>`. The page can't
//! see the response, so any completed request counts as a reply and a network
//! failure, a CORS rejection and a dead host all look the same.

use std::future::{Future, poll_fn};
use std::pin::pin;
use std::task::Poll;
use std::time::Duration;

use fauxsh_core::config::ping::TIMEOUT_MS;
use fauxsh_core::{Network, ProbeError};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::RequestMode;

/// [`Network`] backed by the browser's Fetch API and timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNetwork;

impl Network for BrowserNetwork {
    async fn probe(&self, address: &str) -> Result<Duration, ProbeError> {
        let url = format!("https://{}", address);
        let start = js_sys::Date::now();

        let request = Request::get(&url).mode(RequestMode::NoCors).send();
        match with_timeout(request, TIMEOUT_MS).await {
            Some(Ok(_)) => {
                let elapsed_ms = (js_sys::Date::now() - start).max(0.0);
                Ok(Duration::from_secs_f64(elapsed_ms / 1000.0))
            }
            Some(Err(e)) => Err(ProbeError::Network(e.to_string())),
            None => Err(ProbeError::Timeout),
        }
    }

    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Race `future` against a timer. `None` means the timer fired first.
async fn with_timeout<F: Future>(future: F, timeout_ms: u32) -> Option<F::Output> {
    let mut future = pin!(future);
    let mut timeout = pin!(TimeoutFuture::new(timeout_ms));

    poll_fn(|cx| {
        if let Poll::Ready(output) = future.as_mut().poll(cx) {
            return Poll::Ready(Some(output));
        }
        if timeout.as_mut().poll(cx).is_ready() {
            return Poll::Ready(None);
        }
        Poll::Pending
    })
    .await
}
