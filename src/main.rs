use classic_collections::CollectionError;
use classic_collections::collections::binary_tree::{AvlTreeMap, SearchTreeMap};
use classic_collections::collections::contiguous::Vector;
use classic_collections::collections::hash::HashMap;
use classic_collections::collections::heap::PriorityQueue;
use classic_collections::collections::linked::{ForwardList, LinkedList};
use classic_collections::collections::stack::Stack;

fn main() -> Result<(), CollectionError> {
    println!("\n[Vector]\n");

    let mut vec = Vector::<u8>::new();
    for i in 0..8 {
        vec.push(i);
        println!("{vec:?}");
    }
    vec.try_insert(2, 100)?;
    let removed = vec.try_remove(0)?;
    println!("removed {removed} -> {vec}");

    println!("\n[LinkedList]\n");

    let mut list: LinkedList<&str> = ["b", "c"].into_iter().collect();
    list.push_front("a");
    list.try_insert(3, "d")?;
    println!("{list}");
    println!("{:?}", list.remove_item(&"c"));

    let mut forward: ForwardList<u8> = (1..=4).collect();
    forward.reverse();
    println!("{forward}");

    println!("\n[Stack]\n");

    let mut stack: Stack<char> = "abc".chars().collect();
    println!("peek {:?}, search a {:?}", stack.peek()?, stack.search(&'a'));
    while !stack.is_empty() {
        print!("{} ", stack.pop()?);
    }
    println!();

    println!("\n[AvlTreeMap]\n");

    let mut tree = AvlTreeMap::new();
    for key in [5, 2, 10, 8, 7, 11] {
        tree.put(key, key * key);
    }
    println!("{tree:?}");
    tree.remove(&10);
    println!("{tree}");

    let mut cursor = tree.cursor();
    while let Some((key, value)) = cursor.next(&tree)? {
        print!("{key}={value} ");
    }
    println!();

    tree.put(3, 9);
    if let Err(error) = cursor.next(&tree) {
        println!("{error}");
    }

    println!("\n[SearchTreeMap]\n");

    let mut search: SearchTreeMap<&str, usize> = ["m", "c", "x", "a"].into_iter().zip(0..).collect();
    search.insert("c", 99);
    search.remove(&"m");
    println!("{search:?}");

    println!("\n[HashMap]\n");

    let mut map: HashMap<&str, u32> = HashMap::with_cap_and_load_factor(3, 0.75)?;
    for (i, word) in ["one", "two", "three", "four"].into_iter().enumerate() {
        map.insert(word, i as u32 + 1);
        println!("len {}, cap {}, threshold {}", map.len(), map.cap(), map.threshold());
    }
    map.insert("two", 22);
    println!("{map:?}");
    println!("{map}");

    println!("\n[PriorityQueue]\n");

    let queue: PriorityQueue<i32> = [1, 9, 7, 11, 1, 9, 12, 4, 8, 3, 6, 10, 2, 5]
        .into_iter()
        .collect();
    println!("{}", queue.into_sorted_vector());

    Ok(())
}
