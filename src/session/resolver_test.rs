use super::*;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

fn profile(id: i64, role: &str) -> UserProfile {
    UserProfile {
        id,
        display_name: format!("User {id}"),
        email: format!("u{id}@example.com"),
        role: role.to_owned(),
    }
}

/// Drives one caller through the begin/complete protocol, the way the
/// session store does.
async fn resolve<F, Fut>(resolver: &IdentityResolver, fetch: F) -> Resolution
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Resolution>,
{
    match resolver.begin() {
        Join::Owner => {
            let outcome = fetch().await;
            resolver.complete(&outcome);
            outcome
        }
        Join::Waiter(rx) => match rx.await {
            Ok(outcome) => outcome,
            Err(_) => cancelled(),
        },
    }
}

#[test]
fn single_caller_runs_the_fetch_once() {
    let resolver = IdentityResolver::new();
    let outcome =
        futures::executor::block_on(resolve(&resolver, || async { Ok(profile(1, "auditor")) }));
    assert_eq!(outcome.expect("profile").id, 1);
    assert!(!resolver.in_flight());
}

#[test]
fn concurrent_callers_share_a_single_fetch() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let resolver = Rc::new(IdentityResolver::new());
    let calls = Rc::new(Cell::new(0_u32));
    let outcomes: Rc<RefCell<Vec<Resolution>>> = Rc::default();
    let (release_tx, release_rx) = oneshot::channel::<()>();

    // First caller: fetch stays pending until the test releases it.
    {
        let resolver = resolver.clone();
        let calls = calls.clone();
        let outcomes = outcomes.clone();
        spawner
            .spawn_local(async move {
                let outcome = resolve(&resolver, || async move {
                    calls.set(calls.get() + 1);
                    let _ = release_rx.await;
                    Ok(profile(1, "auditor"))
                })
                .await;
                outcomes.borrow_mut().push(outcome);
            })
            .expect("spawn first caller");
    }

    // Second caller arrives while the first fetch is pending; its own fetch
    // closure must never run.
    {
        let resolver = resolver.clone();
        let calls = calls.clone();
        let outcomes = outcomes.clone();
        spawner
            .spawn_local(async move {
                let outcome = resolve(&resolver, || async move {
                    calls.set(calls.get() + 1);
                    Ok(profile(99, "admin"))
                })
                .await;
                outcomes.borrow_mut().push(outcome);
            })
            .expect("spawn second caller");
    }

    pool.run_until_stalled();
    assert!(resolver.in_flight(), "fetch should still be outstanding");
    assert_eq!(calls.get(), 1, "only the first caller issues a request");

    release_tx.send(()).expect("release the fetch");
    pool.run_until_stalled();

    assert!(!resolver.in_flight());
    assert_eq!(calls.get(), 1);

    let outcomes = outcomes.borrow();
    assert_eq!(outcomes.len(), 2, "both callers resolve");
    for outcome in outcomes.iter() {
        assert_eq!(outcome.as_ref().expect("shared profile").id, 1);
    }
}

#[test]
fn failure_outcome_is_shared_too() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let resolver = Rc::new(IdentityResolver::new());
    let outcomes: Rc<RefCell<Vec<Resolution>>> = Rc::default();
    let (release_tx, release_rx) = oneshot::channel::<()>();

    {
        let resolver = resolver.clone();
        let outcomes = outcomes.clone();
        spawner
            .spawn_local(async move {
                let outcome = resolve(&resolver, || async move {
                    let _ = release_rx.await;
                    Err(ApiError::Unauthorized)
                })
                .await;
                outcomes.borrow_mut().push(outcome);
            })
            .expect("spawn first caller");
    }
    {
        let resolver = resolver.clone();
        let outcomes = outcomes.clone();
        spawner
            .spawn_local(async move {
                let outcome =
                    resolve(&resolver, || async { Ok(profile(1, "auditor")) }).await;
                outcomes.borrow_mut().push(outcome);
            })
            .expect("spawn second caller");
    }

    pool.run_until_stalled();
    release_tx.send(()).expect("release the fetch");
    pool.run_until_stalled();

    let outcomes = outcomes.borrow();
    assert_eq!(outcomes.len(), 2);
    for outcome in outcomes.iter() {
        assert_eq!(outcome.as_ref().expect_err("shared failure"), &ApiError::Unauthorized);
    }
}

#[test]
fn sequential_resolutions_each_issue_their_own_fetch() {
    let resolver = IdentityResolver::new();
    let calls = Cell::new(0_u32);

    let first = futures::executor::block_on(resolve(&resolver, || async {
        calls.set(calls.get() + 1);
        Ok(profile(1, "auditor"))
    }));
    let second = futures::executor::block_on(resolve(&resolver, || async {
        calls.set(calls.get() + 1);
        Ok(profile(2, "auditor"))
    }));

    assert_eq!(calls.get(), 2, "a finished resolution does not pin the slot");
    assert_eq!(first.expect("first").id, 1);
    assert_eq!(second.expect("second").id, 2);
}

#[test]
fn abandoned_fetch_fails_waiters_closed() {
    let resolver = IdentityResolver::new();
    assert!(matches!(resolver.begin(), Join::Owner));
    let Join::Waiter(rx) = resolver.begin() else {
        panic!("second caller should wait");
    };

    // Owner goes away without completing; the waiter must not report success.
    drop(resolver);
    let outcome = futures::executor::block_on(async move {
        match rx.await {
            Ok(outcome) => outcome,
            Err(_) => cancelled(),
        }
    });
    assert!(outcome.is_err());
}
