use crate::dag::SearchDag;
use crate::error::TriangulateError;
use crate::ids::TrapezoidId;

/// Classifies `start` as inside or outside the polygonal area, memoising the
/// result on every trapezoid visited along the way.
///
/// Realised iteratively rather than by direct recursion on `inside(T) =
/// !inside(R[T.left_edge])`, so the call stack never grows with the number
/// of trapezoids crossed by a leftward ray — only a `Vec` does.
pub fn is_inside(dag: &SearchDag, start: TrapezoidId) -> Result<bool, TriangulateError> {
    let mut pending = Vec::new();
    let mut current = start;

    let terminal = loop {
        if let Some(cached) = dag.trapezoid(current).inside.get() {
            break cached;
        }

        let trap = dag.trapezoid(current);
        if trap.is_outside_by_missing_edge() {
            dag.trapezoid(current).inside.set(Some(false));
            break false;
        }

        let left_edge = trap.left_edge.unwrap();
        pending.push(current);
        current = dag.trapezoids().any_registry_member(left_edge)?;
    };

    let mut value = terminal;
    while let Some(trap) = pending.pop() {
        value = !value;
        dag.trapezoid(trap).inside.set(Some(value));
    }
    Ok(value)
}

/// All trapezoids of `dag` classified as inside the polygonal area.
pub fn inside_trapezoids(dag: &SearchDag) -> Result<Vec<TrapezoidId>, TriangulateError> {
    let mut inside = Vec::new();
    for trap in dag.leaves() {
        if is_inside(dag, trap)? {
            inside.push(trap);
        }
    }
    Ok(inside)
}
