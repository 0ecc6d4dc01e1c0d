use drop_zone_core::{Command, Cue, Event};
use drop_zone_feedback::{AudioSink, Feedback, Narrator};
use drop_zone_rendering::{FrameInput, Scene};
use drop_zone_system_announcer::Announcer;
use drop_zone_system_bootstrap::Bootstrap;
use drop_zone_system_controls::Controls;
use drop_zone_world::{self as world, World};

/// Wires the world, the systems and the feedback adapters into one game loop.
pub(crate) struct Session<A, N> {
    world: World,
    controls: Controls,
    announcer: Announcer,
    bootstrap: Bootstrap,
    feedback: Feedback<A, N>,
    commands: Vec<Command>,
    events: Vec<Event>,
    cues: Vec<Cue>,
}

impl<A, N> Session<A, N>
where
    A: AudioSink,
    N: Narrator,
{
    pub(crate) fn new(world: World, feedback: Feedback<A, N>) -> Self {
        Self {
            world,
            controls: Controls::default(),
            announcer: Announcer::new(),
            bootstrap: Bootstrap,
            feedback,
            commands: Vec::new(),
            events: Vec::new(),
            cues: Vec::new(),
        }
    }

    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }

    /// Starts the music and reads the introduction.
    pub(crate) fn start(&mut self) -> Option<String> {
        log::info!("{}", self.bootstrap.welcome_banner(&self.world));
        let command = self.bootstrap.start_command();
        self.dispatch(command)
    }

    /// Runs one command to completion and returns the last line spoken for it.
    pub(crate) fn dispatch(&mut self, command: Command) -> Option<String> {
        log::debug!("applying {command:?}");
        self.events.clear();
        world::apply(&mut self.world, command, &mut self.events);

        self.cues.clear();
        self.announcer.handle(&self.events, &mut self.cues);
        for cue in &self.cues {
            log::debug!("cue {cue:?}");
        }
        self.feedback.deliver(&self.cues)
    }

    /// Routes a frame of input and copies the resulting state into the scene.
    pub(crate) fn handle_frame(&mut self, input: &FrameInput, scene: &mut Scene) {
        let mut commands = std::mem::take(&mut self.commands);
        commands.clear();
        self.controls.handle(input, &mut commands);

        let mut caption = None;
        for command in &commands {
            if let Some(spoken) = self.dispatch(*command) {
                caption = Some(spoken);
            }
        }
        self.commands = commands;

        self.bootstrap.refresh_scene(&self.world, scene, caption);
    }
}
