use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use boid_core::RecordingCanvas;
use boid_playback::{FrameGenerator, FrameQueue, Playback, Tick};
use boid_shared::Position;

#[test]
fn generated_batches_play_back_in_order() {
    let queue = Arc::new(FrameQueue::new());
    let (request_tx, request_rx) = mpsc::channel::<usize>();

    let producer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let mut generator = FrameGenerator::new();
            for len in request_rx {
                let batch = generator.batch_json(len).unwrap();
                queue.push_batch(&batch).unwrap();
            }
            generator.frame()
        })
    };

    request_tx.send(60).unwrap();
    request_tx.send(60).unwrap();
    drop(request_tx);
    let produced = producer.join().unwrap();
    assert_eq!(produced, 120);

    let mut playback = Playback::new(Arc::clone(&queue));
    let mut canvas = RecordingCanvas::new();
    let mut expected = FrameGenerator::new();

    for _ in 0..120 {
        let tick = playback.tick(&mut canvas).unwrap();
        assert_eq!(tick, Tick::Drawn(expected.next_frame()));
    }
    assert_eq!(playback.tick(&mut canvas).unwrap(), Tick::Idle);
    assert_eq!(playback.drawn(), 120);
}

#[test]
fn farewell_message_never_reaches_the_canvas() {
    let queue = Arc::new(FrameQueue::new());
    queue.push(r#"{"x":10.5,"y":20.25}"#);
    assert!(queue.push_batch("Done!").is_err());
    queue.push("Done!");

    let mut playback = Playback::new(Arc::clone(&queue));
    let mut canvas = RecordingCanvas::new();

    assert_eq!(
        playback.tick(&mut canvas).unwrap(),
        Tick::Drawn(Position::new(10.5, 20.25))
    );
    assert_eq!(playback.tick(&mut canvas).unwrap(), Tick::Dropped);
    assert_eq!(playback.tick(&mut canvas).unwrap(), Tick::Idle);
    assert_eq!(canvas.points(), vec![(10.5, 20.25)]);
}
