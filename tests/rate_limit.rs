use dom_test_support::{CallLog, body, ms, test_host};
use domkit::{Clock, Debounced, EventInit, Host, debounce, on, throttle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

#[test]
fn burst_runs_once_with_last_arguments() {
    let (mut host, clock) = test_host();
    let seen = CallLog::new();
    let log = seen.clone();
    let save = debounce(ms(200), move |_, text: String| log.push(text));

    for (i, text) in ["h", "he", "hel", "hell", "hello"].into_iter().enumerate() {
        if i > 0 {
            clock.advance(ms(150));
        }
        save.call(&mut host, text.to_string());
        host.run_due_timers().unwrap();
    }
    assert!(seen.is_empty());

    clock.advance(ms(199));
    assert_eq!(host.run_due_timers(), Ok(0));
    clock.advance(ms(1));
    assert_eq!(host.run_due_timers(), Ok(1));
    assert_eq!(seen.calls(), vec!["hello".to_string()]);
}

#[test]
fn separate_bursts_each_fire() {
    let (mut host, clock) = test_host();
    let seen = CallLog::new();
    let log = seen.clone();
    let debounced = debounce(ms(50), move |host: &mut Host, n: u32| log.push((n, host.now())));
    let start = clock.now();

    debounced.call(&mut host, 1);
    debounced.call(&mut host, 2);
    clock.advance(ms(60));
    host.run_due_timers().unwrap();
    debounced.call(&mut host, 3);
    host.run_until_idle().unwrap();

    assert_eq!(
        seen.calls(),
        vec![(2, start + ms(60)), (3, start + ms(110))]
    );
}

#[test]
fn debounce_from_an_event_listener() {
    let (mut host, clock) = test_host();
    let target = body(&host);
    let seen = CallLog::new();
    let log = seen.clone();
    let on_resize = debounce(ms(100), move |_, n: usize| log.push(n));

    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    on(&mut host, target, "resize", move |host, _| {
        c.set(c.get() + 1);
        on_resize.call(host, c.get());
    });

    for _ in 0..5 {
        host.dispatch_event(target, "resize", EventInit::default());
        clock.advance(ms(10));
    }
    host.run_until_idle().unwrap();
    assert_eq!(seen.calls(), vec![5]);
}

#[test]
fn debounced_function_can_rearm_itself() {
    let (mut host, _clock) = test_host();
    let seen = CallLog::new();
    let log = seen.clone();
    let slot: Rc<RefCell<Option<Debounced<u32>>>> = Rc::new(RefCell::new(None));
    let again = slot.clone();
    let debounced = debounce(ms(10), move |host: &mut Host, n: u32| {
        log.push(n);
        if n < 3 {
            if let Some(d) = again.borrow().as_ref() {
                d.call(host, n + 1);
            }
        }
    });
    *slot.borrow_mut() = Some(debounced.clone());

    debounced.call(&mut host, 1);
    host.run_until_idle().unwrap();
    assert_eq!(seen.calls(), vec![1, 2, 3]);
    assert!(!debounced.is_pending());
    slot.borrow_mut().take();
}

#[test]
fn throttled_calls_are_spaced_by_the_interval() {
    let (mut host, clock) = test_host();
    let seen: CallLog<(u32, Instant)> = CallLog::new();
    let log = seen.clone();
    let throttled = throttle(ms(100), move |host: &mut Host, n: u32| log.push((n, host.now())));

    // one call every 30ms for 1s
    let mut accepted = 0;
    for n in 0..34 {
        if throttled.call(&mut host, n) {
            accepted += 1;
        }
        clock.advance(ms(30));
    }

    let calls = seen.calls();
    assert_eq!(calls.len(), accepted);
    assert_eq!(calls[0].0, 0);
    for pair in calls.windows(2) {
        assert!(pair[1].1 - pair[0].1 >= ms(100));
    }
    // 0, 120, 240, ... 960
    assert_eq!(
        calls.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
        vec![0, 4, 8, 12, 16, 20, 24, 28, 32]
    );
}

#[test]
fn throttle_never_queues_trailing_calls() {
    let (mut host, clock) = test_host();
    let seen = CallLog::new();
    let log = seen.clone();
    let throttled = throttle(ms(100), move |_, n: u32| log.push(n));
    let shared = throttled.clone();

    assert!(throttled.call(&mut host, 1));
    assert!(!shared.call(&mut host, 2));
    clock.advance(ms(500));
    assert_eq!(host.run_until_idle(), Ok(0));
    assert_eq!(seen.calls(), vec![1]);
    assert_eq!(shared.interval(), ms(100));
}

#[test]
fn zero_interval_throttle_lets_everything_through() {
    let (mut host, _clock) = test_host();
    let seen = CallLog::new();
    let log = seen.clone();
    let throttled = throttle(ms(0), move |_, n: u32| log.push(n));
    assert!(throttled.call(&mut host, 1));
    assert!(throttled.call(&mut host, 2));
    assert_eq!(seen.calls(), vec![1, 2]);
}
