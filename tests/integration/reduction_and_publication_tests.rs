use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use futures::StreamExt;
use mockall::Sequence;
use sample_context::{use_state, Action, Color, Provider, SampleReducer, State};

use super::{
    given_a_counter_starting_at, CounterAction, CounterReducer, CounterState, MockStateObserver,
};

#[test]
fn given_a_start_value_should_publish_it_as_the_seed() {
    let (provider, observer) = given_a_counter_starting_at(7);

    assert_eq!(observer.count(), 1);
    assert_eq!(observer.last(), Some(CounterState { count: 7 }));
    assert_eq!(provider.state(), CounterState { count: 7 });
}

#[test]
fn given_several_dispatches_should_publish_one_state_per_action_in_order() {
    let (provider, observer) = given_a_counter_starting_at(0);
    let dispatch = provider.dispatch();

    dispatch.dispatch(CounterAction::Increment);
    dispatch.dispatch(CounterAction::Add(5));
    dispatch.dispatch(CounterAction::Increment);

    assert_eq!(observer.count(), 4);
    observer.with_snapshots(|snapshots| {
        let counts: Vec<i32> = snapshots.iter().map(|state| state.count).collect();
        assert_eq!(counts, vec![0, 1, 6, 7]);
    });
}

#[test]
fn given_an_observer_that_dispatches_should_process_it_before_dispatch_returns() {
    let (provider, observer) = given_a_counter_starting_at(1);
    let dispatch = provider.dispatch();

    let reentrant = dispatch.clone();
    dispatch.observe(move |state: &CounterState| {
        if state.count == 2 {
            reentrant.dispatch(CounterAction::Add(10));
        }
    });

    dispatch.dispatch(CounterAction::Increment);

    assert_eq!(provider.state(), CounterState { count: 12 });
    observer.with_snapshots(|snapshots| {
        let counts: Vec<i32> = snapshots.iter().map(|state| state.count).collect();
        assert_eq!(counts, vec![1, 2, 12]);
    });
}

#[test]
fn given_an_observer_reading_ambient_state_should_see_the_published_value() {
    let (provider, _observer) = given_a_counter_starting_at(0);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let recorded = seen.clone();
    provider.dispatch().observe(move |state: &CounterState| {
        let ambient = use_state::<CounterReducer>();
        recorded.lock().unwrap().push((state.count, ambient.count));
    });

    provider.scope(|| {
        provider.dispatch().dispatch(CounterAction::Add(3));
    });

    assert_eq!(*seen.lock().unwrap(), vec![(3, 3)]);
}

#[test]
fn given_a_mock_observer_should_see_seed_then_each_transition() {
    let mut sequence = Sequence::new();
    let mut observer = MockStateObserver::new();
    observer
        .expect_observe()
        .withf(|state: &State| *state == State::seed())
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    observer
        .expect_observe()
        .withf(|state: &State| state.color == Color::Orange && !state.is_good)
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    observer
        .expect_observe()
        .withf(|state: &State| state.color == Color::Orange && state.is_good)
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());

    let provider = Provider::new(SampleReducer).with_observer(observer).mount();
    let dispatch = provider.dispatch();

    dispatch.dispatch(Action::SetColor {
        color: Color::Orange,
    });
    dispatch.dispatch(Action::ToggleGood);
}

#[test]
fn given_a_subscription_should_queue_states_published_after_it_opened() {
    let (provider, _observer) = given_a_counter_starting_at(0);
    let dispatch = provider.dispatch();

    dispatch.dispatch(CounterAction::Increment);
    let subscription = dispatch.subscribe();
    dispatch.dispatch(CounterAction::Increment);
    dispatch.dispatch(CounterAction::Add(4));

    assert_eq!(subscription.pending(), 2);
    assert_eq!(subscription.try_next(), Some(CounterState { count: 2 }));
    assert_eq!(subscription.latest(), Some(CounterState { count: 6 }));
    assert_eq!(subscription.try_next(), None);
}

#[test]
fn given_a_subscription_when_awaited_should_resolve_to_the_next_state() {
    let (provider, _observer) = given_a_counter_starting_at(0);
    let dispatch = provider.dispatch();
    let subscription = dispatch.subscribe();

    dispatch.dispatch(CounterAction::Add(2));

    assert_eq!(block_on(subscription.next()), Some(CounterState { count: 2 }));
}

#[test]
fn given_a_dropped_provider_should_end_its_subscriptions() {
    let (provider, _observer) = given_a_counter_starting_at(0);
    let subscription = provider.dispatch().subscribe();
    provider.dispatch().dispatch(CounterAction::Increment);

    drop(provider);

    let changes: Vec<CounterState> = block_on(subscription.changes().collect());
    assert_eq!(changes, vec![CounterState { count: 1 }]);
}

#[test]
fn given_a_dropped_subscription_should_keep_dispatching() {
    let (provider, observer) = given_a_counter_starting_at(0);
    let dispatch = provider.dispatch();

    drop(dispatch.subscribe());
    dispatch.dispatch(CounterAction::Increment);
    dispatch.dispatch(CounterAction::Increment);

    assert_eq!(observer.last(), Some(CounterState { count: 2 }));
}
