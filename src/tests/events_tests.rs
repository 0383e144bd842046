#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::events::{Action, ActionEventMapper, Event, EventRegister, MoveDirection};
    use std::thread;

    #[test]
    fn test_mapper_table() {
        let mapper = ActionEventMapper::new();
        assert_eq!(mapper.get_action_by_event(Event::NoPendingEvent), Action::Nothing);
        assert_eq!(
            mapper.get_action_by_event(Event::MoveLeft),
            Action::Move(MoveDirection::Left)
        );
        assert_eq!(
            mapper.get_action_by_event(Event::MoveRight),
            Action::Move(MoveDirection::Right)
        );
        assert_eq!(mapper.get_action_by_event(Event::SpeedUp), Action::Accelerate);
        assert_eq!(mapper.get_action_by_event(Event::RotateFigure), Action::Rotate);
        assert_eq!(mapper.get_action_by_event(Event::PauseGame), Action::Pause);
        assert_eq!(mapper.get_action_by_event(Event::UnpauseGame), Action::Unpause);
    }

    #[test]
    fn test_move_direction_delta() {
        assert_eq!(MoveDirection::Left.delta(), (-1, 0));
        assert_eq!(MoveDirection::Right.delta(), (1, 0));
        assert_eq!(MoveDirection::Down.delta(), (0, 1));
    }

    #[test]
    fn test_empty_register_pops_neutral() {
        let register = EventRegister::new();
        assert!(!register.is_pending());
        assert_eq!(register.pop(), Event::neutral());
    }

    #[test]
    fn test_push_then_pop_resets() {
        let register = EventRegister::new();
        register.push(Event::MoveLeft);
        assert!(register.is_pending());
        assert_eq!(register.pop(), Event::MoveLeft);
        assert_eq!(register.pop(), Event::NoPendingEvent);
    }

    #[test]
    fn test_push_overwrites_pending_event() {
        let register = EventRegister::new();
        register.push(Event::MoveLeft);
        register.push(Event::RotateFigure);
        assert_eq!(register.pop(), Event::RotateFigure);
        assert!(!register.is_pending());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let register = EventRegister::new();
        let producer = register.clone();

        thread::spawn(move || producer.push(Event::SpeedUp))
            .join()
            .expect("producer thread");

        assert_eq!(register.pop(), Event::SpeedUp);
    }

    #[test]
    fn test_concurrent_pushes_leave_one_event() {
        let register = EventRegister::new();
        let handles: Vec<_> = [Event::MoveLeft, Event::MoveRight, Event::RotateFigure]
            .into_iter()
            .map(|event| {
                let producer = register.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        producer.push(event);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("producer thread");
        }

        assert_ne!(register.pop(), Event::NoPendingEvent);
        assert_eq!(register.pop(), Event::NoPendingEvent);
    }
}
