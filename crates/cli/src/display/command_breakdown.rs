use gwt_runner_core::{JavaCommand, command::args::takes_value};

/// Split code server arguments into `flag value` pairs, lone switches and
/// trailing module names.
pub fn describe_args(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut options = Vec::new();
    let mut modules = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if takes_value(arg) && i + 1 < args.len() {
            options.push(format!("{} {}", arg, args[i + 1]));
            i += 1;
        } else if arg.starts_with('-') {
            options.push(arg.clone());
        } else {
            modules.push(arg.clone());
        }
        i += 1;
    }

    (options, modules)
}

pub fn print_command_breakdown(command: &JavaCommand) {
    println!("   🔧 Command breakdown:");
    println!("      • program: {}", command.program);

    if !command.jvm_args.is_empty() {
        println!("      • jvmArgs: {:?}", command.jvm_args);
    }

    if !command.classpath.is_empty() {
        println!("      • classpath:");
        for entry in &command.classpath {
            println!("          - {}", entry.display());
        }
    }

    println!("      • mainClass: {}", command.main_class);

    let (options, modules) = describe_args(&command.args);
    if !options.is_empty() {
        println!("      • options:");
        for option in options {
            println!("          {}", option);
        }
    }
    if !modules.is_empty() {
        println!("      • modules: {}", modules.join(", "));
    }

    if let Some(ref dir) = command.working_dir {
        println!("      • workingDir: {}", dir.display());
    }
}
