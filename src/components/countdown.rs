use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Remaining time until `target`; all zeros once it has passed.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
        let distance = (target - now).num_milliseconds();
        if distance <= 0 {
            return TimeLeft::default();
        }
        const SECOND: i64 = 1000;
        const MINUTE: i64 = 60 * SECOND;
        const HOUR: i64 = 60 * MINUTE;
        const DAY: i64 = 24 * HOUR;
        TimeLeft {
            days: distance / DAY,
            hours: (distance % DAY) / HOUR,
            minutes: (distance % HOUR) / MINUTE,
            seconds: (distance % MINUTE) / SECOND,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::default()
    }
}

#[derive(Properties, PartialEq)]
struct TimeUnitProps {
    value: i64,
    label: &'static str,
}

#[function_component(TimeUnit)]
fn time_unit(props: &TimeUnitProps) -> Html {
    html! {
        <div class="time-unit">
            <div class="time-unit-box">
                <span class="time-unit-value" key={props.value}>{format!("{:02}", props.value)}</span>
            </div>
            <span class="time-unit-label">{props.label}</span>
        </div>
    }
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let target = SiteConfig::default().launch_at;
    let tick_ms = SiteConfig::default().countdown_tick_ms;
    let time_left = use_state_eq(|| TimeLeft::until(target, Utc::now()));

    {
        let time_left = time_left.clone();
        let finished = time_left.is_zero();
        use_effect_with_deps(
            move |(target, finished)| {
                let target = *target;
                let interval = (!*finished).then(|| {
                    Interval::new(tick_ms, move || {
                        time_left.set(TimeLeft::until(target, Utc::now()));
                    })
                });
                move || drop(interval)
            },
            (target, finished),
        );
    }

    html! {
        <div class="countdown">
            <TimeUnit value={time_left.days} label="Days" />
            <TimeUnit value={time_left.hours} label="Hours" />
            <TimeUnit value={time_left.minutes} label="Minutes" />
            <TimeUnit value={time_left.seconds} label="Seconds" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn launch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn breaks_distance_into_units() {
        let now = launch() - Duration::days(3) - Duration::hours(4) - Duration::minutes(5) - Duration::seconds(6);
        assert_eq!(
            TimeLeft::until(launch(), now),
            TimeLeft { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn sub_second_remainder_rounds_down() {
        let now = launch() - Duration::milliseconds(1999);
        assert_eq!(TimeLeft::until(launch(), now).seconds, 1);
    }

    #[test]
    fn past_target_is_zero() {
        assert!(TimeLeft::until(launch(), launch()).is_zero());
        assert!(TimeLeft::until(launch(), launch() + Duration::days(30)).is_zero());
    }
}
