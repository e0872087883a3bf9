use netlab::intro;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let outcome = intro::do_something();
    if let Err(e) = &outcome {
        log::debug!("do_something failed: {e:?}");
    }
    println!("{}", intro::describe(&outcome));
}
