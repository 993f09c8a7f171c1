// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// One open container: its node index and the last child linked so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub container: usize,
    pub last_child: Option<usize>,
}

impl Frame {
    pub fn new(container: usize) -> Self {
        Self {
            container,
            last_child: None,
        }
    }
}

/// Fixed-capacity stack of open containers.
///
/// `N` bounds the nesting depth, root included. Nothing is allocated; the
/// frames live inline.
#[derive(Debug)]
pub struct ContainerStack<const N: usize> {
    frames: [Frame; N],
    depth: usize,
}

impl<const N: usize> ContainerStack<N> {
    pub fn new() -> Self {
        Self {
            frames: [Frame::default(); N],
            depth: 0,
        }
    }

    pub fn push(&mut self, frame: Frame) -> Result<(), ParseError> {
        let slot = self
            .frames
            .get_mut(self.depth)
            .ok_or(ParseError::NestingTooDeep)?;
        *slot = frame;
        self.depth = self.depth.saturating_add(1);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Frame> {
        let top = self.depth.checked_sub(1)?;
        self.depth = top;
        self.frames.get(top).copied()
    }

    /// The innermost open container.
    pub fn top_mut(&mut self) -> Result<&mut Frame, ParseError> {
        let top = self
            .depth
            .checked_sub(1)
            .ok_or(ParseError::UnexpectedState("No open container"))?;
        self.frames
            .get_mut(top)
            .ok_or(ParseError::UnexpectedState("No open container"))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }
}

impl<const N: usize> Default for ContainerStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = ContainerStack::<4>::new();
        assert!(stack.is_empty());
        stack.push(Frame::new(0)).unwrap();
        stack.push(Frame::new(3)).unwrap();
        assert_eq!(stack.depth(), 2);

        stack.top_mut().unwrap().last_child = Some(5);
        assert_eq!(
            stack.pop(),
            Some(Frame {
                container: 3,
                last_child: Some(5)
            })
        );
        assert_eq!(stack.pop(), Some(Frame::new(0)));
        assert_eq!(stack.pop(), None);
        assert!(stack.top_mut().is_err());
    }

    #[test]
    fn test_depth_limit() {
        let mut stack = ContainerStack::<2>::new();
        stack.push(Frame::new(0)).unwrap();
        stack.push(Frame::new(1)).unwrap();
        assert_eq!(stack.push(Frame::new(2)), Err(ParseError::NestingTooDeep));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_zero_capacity_rejects_root() {
        let mut stack = ContainerStack::<0>::new();
        assert_eq!(stack.push(Frame::new(0)), Err(ParseError::NestingTooDeep));
    }
}
