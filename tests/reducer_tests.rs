// Latest-point reduction: ordering, tie-break, missing fields, empty input

mod common;

use common::{at, sum_point};
use cognito_idp_plugin::error::FetchError;
use cognito_idp_plugin::models::{Datapoint, Statistic};
use cognito_idp_plugin::reducer::latest_value;

#[test]
fn later_timestamp_wins() {
    let points = vec![sum_point(10, 5.0), sum_point(20, 7.0)];
    assert_eq!(latest_value(&points, Statistic::Sum).unwrap(), 7.0);
}

#[test]
fn unsorted_input_still_picks_latest() {
    let points = vec![sum_point(300, 3.0), sum_point(900, 9.0), sum_point(600, 6.0)];
    assert_eq!(latest_value(&points, Statistic::Sum).unwrap(), 9.0);
}

#[test]
fn empty_input_is_no_data() {
    let err = latest_value(&[], Statistic::Sum).unwrap_err();
    assert!(matches!(err, FetchError::NoData));
}

#[test]
fn missing_field_on_latest_yields_zero() {
    let points = vec![Datapoint {
        average: Some(3.0),
        ..Datapoint::at(at(10))
    }];
    assert_eq!(latest_value(&points, Statistic::Sum).unwrap(), 0.0);
}

#[test]
fn missing_field_does_not_fall_back_to_older_point() {
    let points = vec![
        sum_point(10, 5.0),
        Datapoint {
            average: Some(1.0),
            ..Datapoint::at(at(20))
        },
    ];
    assert_eq!(latest_value(&points, Statistic::Sum).unwrap(), 0.0);
}

#[test]
fn equal_timestamps_take_last_in_input_order() {
    let points = vec![sum_point(10, 1.0), sum_point(20, 2.0), sum_point(20, 3.0)];
    assert_eq!(latest_value(&points, Statistic::Sum).unwrap(), 3.0);

    let reversed = vec![sum_point(20, 3.0), sum_point(20, 2.0), sum_point(10, 1.0)];
    assert_eq!(latest_value(&reversed, Statistic::Sum).unwrap(), 2.0);
}

#[test]
fn reads_the_requested_statistic() {
    let point = Datapoint {
        sum: Some(10.0),
        average: Some(0.5),
        maximum: Some(4.0),
        minimum: Some(1.0),
        sample_count: Some(20.0),
        ..Datapoint::at(at(60))
    };
    let points = vec![point];
    assert_eq!(latest_value(&points, Statistic::Sum).unwrap(), 10.0);
    assert_eq!(latest_value(&points, Statistic::Average).unwrap(), 0.5);
    assert_eq!(latest_value(&points, Statistic::Maximum).unwrap(), 4.0);
    assert_eq!(latest_value(&points, Statistic::Minimum).unwrap(), 1.0);
    assert_eq!(latest_value(&points, Statistic::SampleCount).unwrap(), 20.0);
}
