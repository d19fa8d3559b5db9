use crate::domain::capture::{
    entities::{FacingMode, VideoEvent},
    errors::{AcquisitionFailure, CaptureError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    NotReady,
    Ready { width: u32, height: u32 },
}

/// Whether the one automatic rear→front retry is still available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Available,
    Spent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Requesting {
        facing: FacingMode,
        fallback: Fallback,
    },
    Streaming {
        facing: FacingMode,
        readiness: Readiness,
    },
    Captured,
    Error(CaptureError),
}

impl CaptureState {
    pub fn is_streaming(&self) -> bool {
        matches!(self, Self::Streaming { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(
            self,
            Self::Streaming {
                readiness: Readiness::Ready { .. },
                ..
            }
        )
    }

    pub fn facing(&self) -> Option<FacingMode> {
        match self {
            Self::Requesting { facing, .. } | Self::Streaming { facing, .. } => Some(*facing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Start(FacingMode),
    CapabilityMissing(CaptureError),
    Acquired,
    Rejected(AcquisitionFailure),
    VideoSignal(VideoEvent),
    Snapshot,
    Cancel,
    Clear,
    FileSelected,
}

/// Pure transition function. `None` means the event does not apply in `state`
/// and the state is left as is.
pub fn next(state: &CaptureState, event: &CaptureEvent) -> Option<CaptureState> {
    use CaptureState::*;

    match (state, event) {
        (Requesting { .. }, CaptureEvent::Start(_)) => None,
        (_, CaptureEvent::Start(facing)) => Some(Requesting {
            facing: *facing,
            fallback: Fallback::Available,
        }),

        (Requesting { .. }, CaptureEvent::CapabilityMissing(_)) => None,
        (_, CaptureEvent::CapabilityMissing(error)) => Some(Error(error.clone())),

        (Requesting { facing, .. }, CaptureEvent::Acquired) => Some(Streaming {
            facing: *facing,
            readiness: Readiness::NotReady,
        }),

        (
            Requesting {
                facing: FacingMode::Rear,
                fallback: Fallback::Available,
            },
            CaptureEvent::Rejected(_),
        ) => Some(Requesting {
            facing: FacingMode::Front,
            fallback: Fallback::Spent,
        }),
        (Requesting { .. }, CaptureEvent::Rejected(failure)) => {
            Some(Error(CaptureError::from(failure.clone())))
        }

        (
            Streaming {
                facing,
                readiness: Readiness::NotReady,
            },
            CaptureEvent::VideoSignal(video),
        ) if video.width > 0 && video.height > 0 => Some(Streaming {
            facing: *facing,
            readiness: Readiness::Ready {
                width: video.width,
                height: video.height,
            },
        }),

        (
            Streaming {
                readiness: Readiness::Ready { .. },
                ..
            },
            CaptureEvent::Snapshot,
        ) => Some(Captured),

        (Streaming { .. }, CaptureEvent::Cancel) => Some(Idle),

        (Requesting { .. }, CaptureEvent::Clear) => None,
        (_, CaptureEvent::Clear) => Some(Idle),

        (Requesting { .. }, CaptureEvent::FileSelected) => None,
        (_, CaptureEvent::FileSelected) => Some(Captured),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::entities::VideoSignal;

    fn streaming(readiness: Readiness) -> CaptureState {
        CaptureState::Streaming {
            facing: FacingMode::Rear,
            readiness,
        }
    }

    fn playing(width: u32, height: u32) -> CaptureEvent {
        CaptureEvent::VideoSignal(VideoEvent {
            signal: VideoSignal::Playing,
            width,
            height,
        })
    }

    #[test]
    fn test_rear_rejection_falls_back_to_front_once() {
        let requesting = next(&CaptureState::Idle, &CaptureEvent::Start(FacingMode::Rear)).unwrap();
        let rejected = CaptureEvent::Rejected(AcquisitionFailure::Other("boom".to_string()));

        let retry = next(&requesting, &rejected).unwrap();
        assert_eq!(
            retry,
            CaptureState::Requesting {
                facing: FacingMode::Front,
                fallback: Fallback::Spent
            }
        );

        let terminal = next(&retry, &rejected).unwrap();
        assert!(matches!(
            terminal,
            CaptureState::Error(CaptureError::AcquisitionFailed(_))
        ));
    }

    #[test]
    fn test_front_rejection_does_not_retry() {
        let requesting =
            next(&CaptureState::Idle, &CaptureEvent::Start(FacingMode::Front)).unwrap();
        let terminal = next(
            &requesting,
            &CaptureEvent::Rejected(AcquisitionFailure::PermissionDenied),
        )
        .unwrap();

        assert_eq!(terminal, CaptureState::Error(CaptureError::PermissionDenied));
    }

    #[test]
    fn test_readiness_needs_non_zero_dimensions() {
        let not_ready = streaming(Readiness::NotReady);

        assert_eq!(next(&not_ready, &playing(0, 480)), None);
        assert_eq!(next(&not_ready, &playing(640, 0)), None);
        assert_eq!(
            next(&not_ready, &playing(640, 480)),
            Some(streaming(Readiness::Ready {
                width: 640,
                height: 480
            }))
        );
    }

    #[test]
    fn test_snapshot_gated_on_readiness() {
        assert_eq!(
            next(&streaming(Readiness::NotReady), &CaptureEvent::Snapshot),
            None
        );
        assert_eq!(
            next(
                &streaming(Readiness::Ready {
                    width: 1,
                    height: 1
                }),
                &CaptureEvent::Snapshot
            ),
            Some(CaptureState::Captured)
        );
        assert_eq!(next(&CaptureState::Idle, &CaptureEvent::Snapshot), None);
    }

    #[test]
    fn test_cancel_only_from_streaming() {
        assert_eq!(
            next(&streaming(Readiness::NotReady), &CaptureEvent::Cancel),
            Some(CaptureState::Idle)
        );
        assert_eq!(next(&CaptureState::Captured, &CaptureEvent::Cancel), None);
    }

    #[test]
    fn test_file_selection_bypasses_streaming() {
        assert_eq!(
            next(&CaptureState::Idle, &CaptureEvent::FileSelected),
            Some(CaptureState::Captured)
        );
        assert_eq!(
            next(
                &CaptureState::Error(CaptureError::DeviceNotFound),
                &CaptureEvent::FileSelected
            ),
            Some(CaptureState::Captured)
        );
        assert_eq!(
            next(&CaptureState::Captured, &CaptureEvent::Clear),
            Some(CaptureState::Idle)
        );
    }

    #[test]
    fn test_no_overlapping_requests() {
        let requesting = CaptureState::Requesting {
            facing: FacingMode::Rear,
            fallback: Fallback::Available,
        };
        assert_eq!(next(&requesting, &CaptureEvent::Start(FacingMode::Front)), None);
        assert_eq!(next(&requesting, &CaptureEvent::FileSelected), None);
    }
}
