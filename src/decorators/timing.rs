// Wall-clock timing around a call
// Author: kelexine (https://github.com/kelexine)

use crate::utils::logging::console_log;
use std::future::Future;
use std::time::{Duration, Instant};

fn report(name: &str, elapsed: Duration) {
    console_log(
        "INFO",
        format!(
            "'{}()' took {:.3} seconds to execute",
            name,
            elapsed.as_secs_f64()
        ),
    );
}

/// Run `f`, log how long it took, and hand back its result untouched.
pub fn get_time<F, T>(name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    report(name, start.elapsed());
    result
}

/// Await `fut` and log how long it took.
pub async fn get_time_async<Fut, T>(name: &str, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    let start = Instant::now();
    let result = fut.await;
    report(name, start.elapsed());
    result
}
