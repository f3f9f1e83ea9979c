use std::any::Any;

use dsa_kit::prelude::*;

fn main() -> Result<(), CollectionError> {
    println!("--- hash map ---");
    let mut map = ChainedHashMap::new();
    map.put("cat", "meow")?;
    map.put("cat", "purr")?;
    map.put("dog", "bark")?;
    println!("get(\"cat\") = {:?}", map.get("cat")?);
    println!("get(\"cow\") = {:?}", map.get("cow")?);
    println!("remove(\"dog\") = {:?}", map.remove("dog")?);

    let number: &dyn Any = &123;
    if let Err(err) = map.put(number, "moo") {
        println!("put(123) failed: {err}");
    }

    for i in 0..9 {
        map.put(&format!("key{i}"), "v")?;
    }
    println!("size {} capacity {}", map.len(), map.capacity());
    println!("{map}");

    println!("\n--- collisions (lose-lose) ---");
    let mut anagrams = ChainedHashMap::with_capacity_and_hasher(5, LoseLose)?;
    for key in ["listen", "silent", "enlist", "tinsel"] {
        anagrams.put(key, key.len())?;
    }
    println!("{anagrams}");

    println!("\n--- singly ---");
    let mut singly = singly![1 => 2 => 3];
    singly.prepend(0);
    singly.delete_at(2)?;
    println!("{singly}");

    println!("\n--- doubly ---");
    let mut doubly = doubly!['a' => 'c'];
    doubly.insert_at_position(1, 'b')?;
    doubly.update_at_position(2, 'z')?;
    println!("{doubly}");
    print!("backward:");
    doubly.traverse_backward(|c| print!(" {c}"));
    println!();

    println!("\n--- circular ---");
    let mut ring = ring!["A" => "B" => "C"];
    ring.insert_at_position(-1, "D")?;
    println!("{ring}");
    ring.delete_at_position(5)?;
    println!("{ring}");

    println!("\n--- stack / queue ---");
    let mut stack = Stack::with_capacity(3);
    for x in [4, 9, 1] {
        stack.push(x)?;
    }
    if let Err(err) = stack.push(7) {
        println!("push(7) failed: {err}");
    }
    println!("{stack} max {} min {}", stack.get_max()?, stack.get_min()?);

    let mut queue = Queue::new();
    queue.enqueue(2.5)?;
    queue.enqueue(f64::NAN)?;
    println!("{queue}");
    if let Err(err) = queue.get_max() {
        println!("get_max failed: {err}");
    }

    Ok(())
}
