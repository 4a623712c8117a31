/// Evaluate a block, logging how long it took at `debug` level. Returns the value of the block.
#[macro_export]
macro_rules! profile(
  ($title: literal, $body: block) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    tracing::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
