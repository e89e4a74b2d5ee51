//! One-shot reveal scheduling.
//!
//! Every registered target moves from [`RevealState::Pending`] to
//! [`RevealState::Revealed`] exactly once. The transition itself cancels the
//! target's visibility subscription, so a revealed target is never observed
//! again. Hosts that cannot detect visibility make every target reveal
//! immediately.

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

pub const DEFAULT_THRESHOLD: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    FadeUp,
    FadeLeft,
    FadeRight,
    Zoom,
}

impl AnimationKind {
    pub fn class(self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeLeft => "fade-left",
            AnimationKind::FadeRight => "fade-right",
            AnimationKind::Zoom => "zoom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the target that must be visible before it counts as seen.
    pub threshold: f64,
    pub kind: Option<AnimationKind>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            kind: None,
        }
    }
}

impl RevealOptions {
    pub fn animated(kind: AnimationKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Something that can be switched into its revealed look.
pub trait Revealable: Clone {
    fn reveal(&self, kind: Option<AnimationKind>);
}

/// A live visibility subscription. Cancelling consumes it.
pub trait Subscription {
    fn cancel(self);
}

/// The runtime facilities a [`RevealScheduler`] needs.
pub trait RevealHost {
    type Target: Revealable;
    type Subscription: Subscription;
    /// Pending delayed task. Dropping it cancels the task.
    type Deferred;

    /// Starts watching `target`, calling `on_visible` whenever it crosses
    /// `threshold`. Returns `None` when visibility cannot be detected.
    fn subscribe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_visible: Box<dyn FnMut()>,
    ) -> Option<Self::Subscription>;

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Deferred;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealId(usize);

struct Slot<H: RevealHost> {
    target: H::Target,
    kind: Option<AnimationKind>,
    state: RevealState,
    subscription: Option<H::Subscription>,
}

struct Group<H: RevealHost> {
    members: Vec<usize>,
    stagger_ms: u32,
    triggered: bool,
    subscription: Option<H::Subscription>,
}

struct Inner<H: RevealHost> {
    slots: Vec<Slot<H>>,
    groups: Vec<Group<H>>,
    timers: Vec<H::Deferred>,
    disposed: bool,
}

pub struct RevealScheduler<H: RevealHost + 'static> {
    host: Rc<H>,
    inner: Rc<RefCell<Inner<H>>>,
}

impl<H: RevealHost + 'static> RevealScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Rc::new(host),
            inner: Rc::new(RefCell::new(Inner {
                slots: Vec::new(),
                groups: Vec::new(),
                timers: Vec::new(),
                disposed: false,
            })),
        }
    }

    pub fn register(&self, target: H::Target, options: RevealOptions) -> RevealId {
        let index = self.push_slot(target.clone(), options.kind);
        if self.inner.borrow().disposed {
            return RevealId(index);
        }

        let on_visible: Box<dyn FnMut()> = {
            let inner = Rc::downgrade(&self.inner);
            Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    reveal_slot(&inner, index);
                }
            })
        };

        match self.host.subscribe(&target, options.threshold, on_visible) {
            Some(subscription) => {
                let leftover = {
                    let mut inner = self.inner.borrow_mut();
                    let slot = &mut inner.slots[index];
                    if slot.state == RevealState::Pending {
                        slot.subscription = Some(subscription);
                        None
                    } else {
                        Some(subscription)
                    }
                };
                if let Some(subscription) = leftover {
                    subscription.cancel();
                }
            }
            None => {
                log::debug!("Visibility detection unavailable, revealing target {} now", index);
                reveal_slot(&self.inner, index);
            }
        }

        RevealId(index)
    }

    /// Watches `container` and, once it is visible, reveals `members` one
    /// after another with `stagger_ms` between them.
    pub fn register_group(
        &self,
        container: H::Target,
        members: Vec<H::Target>,
        stagger_ms: u32,
        options: RevealOptions,
    ) -> Vec<RevealId> {
        let member_slots: Vec<usize> = members
            .into_iter()
            .map(|member| self.push_slot(member, options.kind))
            .collect();
        let ids: Vec<RevealId> = member_slots.iter().copied().map(RevealId).collect();

        let group = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return ids;
            }
            inner.groups.push(Group {
                members: member_slots,
                stagger_ms,
                triggered: false,
                subscription: None,
            });
            inner.groups.len() - 1
        };

        let on_visible: Box<dyn FnMut()> = {
            let inner = Rc::downgrade(&self.inner);
            let host = Rc::downgrade(&self.host);
            Box::new(move || {
                if let (Some(inner), Some(host)) = (inner.upgrade(), host.upgrade()) {
                    trigger_group(&*host, &inner, group, false);
                }
            })
        };

        match self.host.subscribe(&container, options.threshold, on_visible) {
            Some(subscription) => {
                let leftover = {
                    let mut inner = self.inner.borrow_mut();
                    let entry = &mut inner.groups[group];
                    if entry.triggered {
                        Some(subscription)
                    } else {
                        entry.subscription = Some(subscription);
                        None
                    }
                };
                if let Some(subscription) = leftover {
                    subscription.cancel();
                }
            }
            None => trigger_group(&*self.host, &self.inner, group, true),
        }

        ids
    }

    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.inner.borrow().slots.get(id.0).map(|slot| slot.state)
    }

    /// Number of subscriptions still waiting for their target to show up.
    pub fn observed_count(&self) -> usize {
        let inner = self.inner.borrow();
        let slots = inner.slots.iter().filter(|s| s.subscription.is_some()).count();
        let groups = inner.groups.iter().filter(|g| g.subscription.is_some()).count();
        slots + groups
    }

    /// Cancels every subscription and pending stagger timer. Idempotent.
    pub fn dispose(&self) {
        let (subscriptions, timers) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            let mut subscriptions: Vec<H::Subscription> = inner
                .slots
                .iter_mut()
                .filter_map(|slot| slot.subscription.take())
                .collect();
            subscriptions.extend(inner.groups.iter_mut().filter_map(|g| g.subscription.take()));
            (subscriptions, mem::take(&mut inner.timers))
        };
        for subscription in subscriptions {
            subscription.cancel();
        }
        drop(timers);
    }

    fn push_slot(&self, target: H::Target, kind: Option<AnimationKind>) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.slots.push(Slot {
            target,
            kind,
            state: RevealState::Pending,
            subscription: None,
        });
        inner.slots.len() - 1
    }
}

impl<H: RevealHost + 'static> Drop for RevealScheduler<H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn reveal_slot<H: RevealHost>(inner: &RefCell<Inner<H>>, index: usize) {
    let (target, kind, subscription) = {
        let mut inner = inner.borrow_mut();
        if inner.disposed {
            return;
        }
        let Some(slot) = inner.slots.get_mut(index) else {
            return;
        };
        if slot.state == RevealState::Revealed {
            return;
        }
        slot.state = RevealState::Revealed;
        (slot.target.clone(), slot.kind, slot.subscription.take())
    };

    if let Some(subscription) = subscription {
        subscription.cancel();
    }
    target.reveal(kind);
}

fn trigger_group<H: RevealHost + 'static>(
    host: &H,
    inner: &Rc<RefCell<Inner<H>>>,
    group: usize,
    immediate: bool,
) {
    let (members, stagger_ms, subscription) = {
        let mut inner = inner.borrow_mut();
        if inner.disposed {
            return;
        }
        let Some(entry) = inner.groups.get_mut(group) else {
            return;
        };
        if entry.triggered {
            return;
        }
        entry.triggered = true;
        (entry.members.clone(), entry.stagger_ms, entry.subscription.take())
    };

    if let Some(subscription) = subscription {
        subscription.cancel();
    }

    for (position, index) in members.into_iter().enumerate() {
        let delay = stagger_ms.saturating_mul(position as u32);
        if immediate || delay == 0 {
            reveal_slot(inner, index);
            continue;
        }
        let weak: Weak<RefCell<Inner<H>>> = Rc::downgrade(inner);
        let timer = host.defer(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    reveal_slot(&inner, index);
                }
            }),
        );
        inner.borrow_mut().timers.push(timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Default)]
    struct FakeTarget {
        reveals: Rc<Cell<u32>>,
        last_kind: Rc<Cell<Option<AnimationKind>>>,
    }

    impl Revealable for FakeTarget {
        fn reveal(&self, kind: Option<AnimationKind>) {
            self.reveals.set(self.reveals.get() + 1);
            self.last_kind.set(kind);
        }
    }

    struct FakeSubscription {
        live: Rc<Cell<bool>>,
    }

    impl Subscription for FakeSubscription {
        fn cancel(self) {
            self.live.set(false);
        }
    }

    struct Watch {
        live: Rc<Cell<bool>>,
        on_visible: Box<dyn FnMut()>,
    }

    struct Task {
        delay_ms: u32,
        cancelled: Rc<Cell<bool>>,
        run: Option<Box<dyn FnOnce()>>,
    }

    struct FakeDeferred(Rc<Cell<bool>>);

    impl Drop for FakeDeferred {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    /// Test double that records watches and timers so the test decides
    /// when targets become visible and when time passes.
    #[derive(Clone, Default)]
    struct FakeHost {
        supported: bool,
        watches: Rc<RefCell<Vec<Watch>>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    impl FakeHost {
        fn supported() -> Self {
            Self {
                supported: true,
                ..Self::default()
            }
        }

        /// Fires the visibility callback of watch `n`, as the browser would
        /// even after the watch was cancelled if a callback was already queued.
        fn fire(&self, n: usize) {
            let mut callback = {
                let mut watches = self.watches.borrow_mut();
                mem::replace(&mut watches[n].on_visible, Box::new(|| {}))
            };
            callback();
            self.watches.borrow_mut()[n].on_visible = callback;
        }

        fn live_watches(&self) -> usize {
            self.watches.borrow().iter().filter(|w| w.live.get()).count()
        }

        fn delays(&self) -> Vec<u32> {
            self.tasks.borrow().iter().map(|t| t.delay_ms).collect()
        }

        fn run_tasks(&self) {
            let runnable: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|t| !t.cancelled.get())
                .filter_map(|t| t.run.take())
                .collect();
            for run in runnable {
                run();
            }
        }
    }

    impl RevealHost for FakeHost {
        type Target = FakeTarget;
        type Subscription = FakeSubscription;
        type Deferred = FakeDeferred;

        fn subscribe(
            &self,
            _target: &FakeTarget,
            _threshold: f64,
            on_visible: Box<dyn FnMut()>,
        ) -> Option<FakeSubscription> {
            if !self.supported {
                return None;
            }
            let live = Rc::new(Cell::new(true));
            self.watches.borrow_mut().push(Watch {
                live: live.clone(),
                on_visible,
            });
            Some(FakeSubscription { live })
        }

        fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeDeferred {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(Task {
                delay_ms,
                cancelled: cancelled.clone(),
                run: Some(task),
            });
            FakeDeferred(cancelled)
        }
    }

    #[test]
    fn test_reveal_happens_once_and_unsubscribes() {
        let host = FakeHost::supported();
        let scheduler = RevealScheduler::new(host.clone());
        let target = FakeTarget::default();

        let id = scheduler.register(target.clone(), RevealOptions::animated(AnimationKind::Zoom));
        assert_eq!(scheduler.state(id), Some(RevealState::Pending));
        assert_eq!(host.live_watches(), 1);

        for _ in 0..5 {
            host.fire(0);
        }

        assert_eq!(target.reveals.get(), 1);
        assert_eq!(target.last_kind.get(), Some(AnimationKind::Zoom));
        assert_eq!(scheduler.state(id), Some(RevealState::Revealed));
        assert_eq!(host.live_watches(), 0);
        assert_eq!(scheduler.observed_count(), 0);
    }

    #[test]
    fn test_revealed_state_never_reverts() {
        let host = FakeHost::supported();
        let scheduler = RevealScheduler::new(host.clone());
        let id = scheduler.register(FakeTarget::default(), RevealOptions::default());

        host.fire(0);
        scheduler.dispose();
        host.fire(0);

        assert_eq!(scheduler.state(id), Some(RevealState::Revealed));
    }

    #[test]
    fn test_targets_are_independent() {
        let host = FakeHost::supported();
        let scheduler = RevealScheduler::new(host.clone());
        let first = FakeTarget::default();
        let second = FakeTarget::default();
        scheduler.register(first.clone(), RevealOptions::default());
        let second_id = scheduler.register(second.clone(), RevealOptions::default());

        host.fire(0);

        assert_eq!(first.reveals.get(), 1);
        assert_eq!(second.reveals.get(), 0);
        assert_eq!(scheduler.state(second_id), Some(RevealState::Pending));
        assert_eq!(host.live_watches(), 1);
    }

    #[test]
    fn test_unsupported_host_reveals_immediately() {
        let host = FakeHost::default();
        let scheduler = RevealScheduler::new(host.clone());
        let target = FakeTarget::default();

        let id = scheduler.register(target.clone(), RevealOptions::default());

        assert_eq!(scheduler.state(id), Some(RevealState::Revealed));
        assert_eq!(target.reveals.get(), 1);
    }

    #[test]
    fn test_group_reveals_members_with_stagger() {
        let host = FakeHost::supported();
        let scheduler = RevealScheduler::new(host.clone());
        let members: Vec<FakeTarget> = (0..3).map(|_| FakeTarget::default()).collect();

        let ids = scheduler.register_group(
            FakeTarget::default(),
            members.clone(),
            120,
            RevealOptions::animated(AnimationKind::FadeUp),
        );
        assert!(ids.iter().all(|id| scheduler.state(*id) == Some(RevealState::Pending)));

        host.fire(0);
        assert_eq!(members[0].reveals.get(), 1);
        assert_eq!(members[1].reveals.get(), 0);
        assert_eq!(host.delays(), vec![120, 240]);
        assert_eq!(host.live_watches(), 0);

        host.run_tasks();
        host.fire(0);
        host.run_tasks();

        assert!(members.iter().all(|m| m.reveals.get() == 1));
        assert!(ids.iter().all(|id| scheduler.state(*id) == Some(RevealState::Revealed)));
    }

    #[test]
    fn test_group_without_visibility_support_reveals_everything() {
        let host = FakeHost::default();
        let scheduler = RevealScheduler::new(host.clone());
        let members: Vec<FakeTarget> = (0..4).map(|_| FakeTarget::default()).collect();

        scheduler.register_group(FakeTarget::default(), members.clone(), 100, RevealOptions::default());

        assert!(members.iter().all(|m| m.reveals.get() == 1));
        assert!(host.delays().is_empty());
    }

    #[test]
    fn test_dispose_is_idempotent_and_cancels_everything() {
        let host = FakeHost::supported();
        let scheduler = RevealScheduler::new(host.clone());
        let lone = FakeTarget::default();
        let members: Vec<FakeTarget> = (0..2).map(|_| FakeTarget::default()).collect();
        scheduler.register(lone.clone(), RevealOptions::default());
        scheduler.register_group(FakeTarget::default(), members.clone(), 50, RevealOptions::default());

        host.fire(1);
        assert_eq!(members[0].reveals.get(), 1);

        scheduler.dispose();
        scheduler.dispose();

        assert_eq!(host.live_watches(), 0);
        host.run_tasks();
        host.fire(0);
        assert_eq!(members[1].reveals.get(), 0);
        assert_eq!(lone.reveals.get(), 0);
    }

    #[test]
    fn test_drop_releases_subscriptions() {
        let host = FakeHost::supported();
        {
            let scheduler = RevealScheduler::new(host.clone());
            scheduler.register(FakeTarget::default(), RevealOptions::default());
            assert_eq!(host.live_watches(), 1);
        }
        assert_eq!(host.live_watches(), 0);
        host.fire(0);
    }
}
