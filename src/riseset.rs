//! Iterative refinement of rise, set and transit instants.
//!
//! The first estimates from [`crate::topocentric::transform`] assume the body does not move
//! during the day. Each refinement step recomputes the epoch, the body position and the
//! estimate at the previous estimate, until successive instants agree to one second.

use log::{debug, trace, warn};

use crate::epoch::EpochState;
use crate::time::SECONDS_PER_DAY;
use crate::topocentric::transform;
use crate::types::{BodyPosition, Ephemeris, Event, Observer, Twilight, Vantage};

/// Maximum number of refinement steps per event.
pub const MAX_ITERATIONS: usize = 15;

/// Convergence threshold in days (one second).
const TOLERANCE: f64 = 1.0 / SECONDS_PER_DAY;

/// Refines one event instant.
///
/// # Arguments
/// * `epoch` - Epoch state of the original instant (ΔT and longitude are reused)
/// * `observer` - Observer location
/// * `model` - Position model of the body, e.g. [`crate::sun::position`]
/// * `twilight` - Event elevation selector
/// * `event` - Which event to refine
/// * `start` - First estimate as a Julian Day (UT)
///
/// # Returns
/// The converged Julian Day, or `None` if there is no start value, the event disappears
/// during the iteration, or it does not converge within [`MAX_ITERATIONS`] steps.
#[must_use]
pub fn refine<M>(
    epoch: &EpochState,
    observer: &Observer,
    model: M,
    twilight: Twilight,
    event: Event,
    start: Option<f64>,
) -> Option<f64>
where
    M: Fn(&EpochState) -> BodyPosition,
{
    let mut jd = start?;
    for iteration in 0..MAX_ITERATIONS {
        let trial = epoch.at(jd);
        let estimate = transform(&trial, observer, &model(&trial), twilight, Vantage::Topocentric)
            .event(event)?;
        let step = (jd - estimate).abs();
        trace!("{event:?} iteration {iteration}: jd {estimate:.8}, step {step:.3e} d");

        jd = estimate;
        if step <= TOLERANCE {
            debug!("{event:?} converged to jd {jd:.8} after {} steps", iteration + 1);
            return Some(jd);
        }
    }

    warn!("{event:?} did not converge within {MAX_ITERATIONS} steps, last jd {jd:.8}");
    None
}

/// Refines rise, set and transit of a first-estimate ephemeris.
///
/// The transit elevation is re-evaluated at the refined transit, and is `None` when the
/// transit is unavailable. All other fields are kept.
#[must_use]
pub fn refine_all<M>(
    epoch: &EpochState,
    observer: &Observer,
    model: M,
    twilight: Twilight,
    estimate: Ephemeris,
) -> Ephemeris
where
    M: Fn(&EpochState) -> BodyPosition,
{
    let mut refined = estimate;
    for event in Event::ALL {
        let value = refine(epoch, observer, &model, twilight, event, estimate.event(event));
        refined.set_event(event, value);
    }

    refined.transit_elevation = refined.transit.and_then(|transit| {
        let at_transit = epoch.at(transit);
        transform(
            &at_transit,
            observer,
            &model(&at_transit),
            twilight,
            Vantage::Topocentric,
        )
        .transit_elevation()
    });
    refined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{degrees_to_radians, radians_to_degrees};
    use crate::time::calendar_from_julian_day;

    fn madrid() -> Observer {
        Observer::new(40.0, -4.0, 0.0).unwrap()
    }

    fn reference_epoch() -> EpochState {
        EpochState::new(2_459_375.25, 72.26330697303638, degrees_to_radians(-4.0))
    }

    fn estimate(epoch: &EpochState, observer: &Observer) -> Ephemeris {
        transform(
            epoch,
            observer,
            &crate::sun::position(epoch),
            Twilight::Horizon,
            Vantage::Topocentric,
        )
    }

    #[test]
    fn test_refined_sun_events() {
        let epoch = reference_epoch();
        let observer = madrid();
        let refined = refine_all(
            &epoch,
            &observer,
            crate::sun::position,
            Twilight::Horizon,
            estimate(&epoch, &observer),
        );

        // Set on the same evening, rise on the next morning (the morning rise has passed)
        let set = calendar_from_julian_day(refined.set().unwrap());
        assert_eq!((set.day(), set.hour(), set.minute()), (9, 19, 43));
        let rise = calendar_from_julian_day(refined.rise().unwrap());
        assert_eq!((rise.day(), rise.hour(), rise.minute()), (10, 4, 46));
        let transit = calendar_from_julian_day(refined.transit().unwrap());
        assert_eq!((transit.day(), transit.hour(), transit.minute()), (9, 12, 15));

        let transit_elevation = radians_to_degrees(refined.transit_elevation().unwrap());
        assert!((transit_elevation - 72.97668055235657).abs() < 1e-6);
    }

    #[test]
    fn test_refined_moon_events() {
        let epoch = reference_epoch();
        let observer = madrid();
        let moon = |state: &EpochState| crate::moon::position(state).position();
        let first = transform(&epoch, &observer, &moon(&epoch), Twilight::Horizon, Vantage::Topocentric);
        let refined = refine_all(&epoch, &observer, moon, Twilight::Horizon, first);

        assert!((refined.rise().unwrap() - 2_459_375.693516702).abs() < 2e-6);
        assert!((refined.set().unwrap() - 2_459_375.294745623).abs() < 2e-6);
        assert!((refined.transit().unwrap() - 2_459_374.979053324).abs() < 2e-6);
    }

    #[test]
    fn test_refine_without_start() {
        let epoch = reference_epoch();
        let result = refine(
            &epoch,
            &madrid(),
            crate::sun::position,
            Twilight::Horizon,
            Event::Rise,
            None,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_refinement_is_a_fixed_point() {
        let epoch = reference_epoch();
        let observer = madrid();
        let first = estimate(&epoch, &observer);
        let transit = refine(
            &epoch,
            &observer,
            crate::sun::position,
            Twilight::Horizon,
            Event::Transit,
            first.transit(),
        )
        .unwrap();

        // Starting from the refined value converges immediately to the same instant
        let again = refine(
            &epoch,
            &observer,
            crate::sun::position,
            Twilight::Horizon,
            Event::Transit,
            Some(transit),
        )
        .unwrap();
        assert!((again - transit).abs() <= TOLERANCE);
    }

    #[test]
    fn test_polar_day_keeps_transit_only() {
        // Tromsø, midnight sun
        let observer = Observer::new(69.65, 18.95, 10.0).unwrap();
        let epoch = EpochState::new(2_459_386.5, 69.0, observer.longitude());
        let refined = refine_all(
            &epoch,
            &observer,
            crate::sun::position,
            Twilight::Horizon,
            estimate(&epoch, &observer),
        );

        assert_eq!(refined.rise(), None);
        assert_eq!(refined.set(), None);
        assert!(refined.transit().is_some());
        assert!(refined.transit_elevation().unwrap() > 0.0);
    }
}
