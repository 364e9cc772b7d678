
use sample_context::{MountedProvider, Provider, TestObserver};
pub(crate) use counter_logic::*;

mod reducer_property_tests;
mod reduction_and_publication_tests;

pub(crate) fn given_a_counter_starting_at(
    start: i32,
) -> (MountedProvider<CounterReducer>, TestObserver<CounterState>) {
    let observer = TestObserver::new();
    let provider = Provider::new(CounterReducer { start })
        .with_observer(observer.clone())
        .mount();

    (provider, observer)
}
