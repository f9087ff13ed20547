use super::*;
use std::cell::RefCell;

#[test]
fn closures_are_debug_logs() {
    let lines = RefCell::new(Vec::new());
    let log = |args: fmt::Arguments<'_>| lines.borrow_mut().push(args.to_string());

    let sink: &dyn DebugLog = &log;
    sink.debug(format_args!("bind {} to {}", "x", 7));

    assert_eq!(lines.into_inner(), vec!["bind x to 7".to_string()]);
}

#[test]
fn custom_sinks_implement_the_trait() {
    #[derive(Default)]
    struct Counter(std::cell::Cell<usize>);

    impl DebugLog for Counter {
        fn debug(&self, _args: fmt::Arguments<'_>) {
            self.0.set(self.0.get() + 1);
        }
    }

    let counter = Counter::default();
    counter.debug(format_args!("one"));
    counter.debug(format_args!("two"));
    assert_eq!(counter.0.get(), 2);
}
