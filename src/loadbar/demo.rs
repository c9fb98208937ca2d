//! Simulated resources, loaded in background threads.

use crate::event::Event;
use crate::event::Event::LoadProgress;
use crate::loadbar::progress::LoadEvent;
use crate::loadbar::resource::{LEVEL_CONFIG, SCENE, TEXTURE_FIRE};
use log::{debug, info};
use std::sync::mpsc::{SendError, Sender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub(crate) struct DemoResource {
    pub(crate) name: &'static str,
    pub(crate) target_size: u64,
    pub(crate) chunk_size: u64,
    pub(crate) interval: Duration,
}

pub(crate) const DEMO_RESOURCES: [DemoResource; 3] = [
    DemoResource {
        name: SCENE,
        target_size: 48 * 1024 * 1024,
        chunk_size: 1024 * 1024,
        interval: Duration::from_millis(60),
    },
    DemoResource {
        name: LEVEL_CONFIG,
        target_size: 12 * 1024,
        chunk_size: 4 * 1024,
        interval: Duration::from_millis(300),
    },
    DemoResource {
        name: TEXTURE_FIRE,
        target_size: 4 * 1024 * 1024,
        chunk_size: 256 * 1024,
        interval: Duration::from_millis(120),
    },
];

pub(crate) fn start(sender: &Sender<Event>) {
    info!("Starting demo resources");
    for resource in DEMO_RESOURCES {
        let sender = sender.clone();
        thread::spawn(move || {
            if simulate(&sender, &resource).is_err() {
                debug!("Receiver closed, {} stopped", resource.name);
            }
        });
    }
}

/// Declares the target size, then reports the loaded size only.
pub(crate) fn simulate(
    sender: &Sender<Event>,
    resource: &DemoResource,
) -> Result<(), SendError<Event>> {
    sender.send(LoadProgress(LoadEvent::progress(
        resource.name,
        0,
        resource.target_size,
    )))?;
    let mut loaded = 0;
    while loaded < resource.target_size {
        thread::sleep(resource.interval);
        loaded = (loaded + resource.chunk_size).min(resource.target_size);
        sender.send(LoadProgress(
            LoadEvent::new(resource.name, false).with_loaded_size(loaded),
        ))?;
    }
    sender.send(LoadProgress(LoadEvent::complete(resource.name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_simulate_reports_until_complete() {
        let (sender, receiver) = channel();
        let resource = DemoResource {
            name: "test",
            target_size: 10,
            chunk_size: 4,
            interval: Duration::ZERO,
        };
        simulate(&sender, &resource).unwrap();
        drop(sender);

        let events: Vec<LoadEvent> = receiver
            .iter()
            .map(|event| match event {
                LoadProgress(event) => event,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        let loaded: Vec<Option<u64>> = events.iter().map(|event| event.loaded_size).collect();
        assert_eq!(vec![Some(0), Some(4), Some(8), Some(10), None], loaded);
        assert_eq!(Some(10), events[0].target_size);
        assert!(events.last().unwrap().is_complete);
    }

    #[test]
    fn test_simulate_stops_when_receiver_is_gone() {
        let (sender, receiver) = channel();
        drop(receiver);
        assert!(simulate(&sender, &DEMO_RESOURCES[1]).is_err());
    }
}
