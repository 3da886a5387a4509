//! Built-in "learn Flutter" catalog.
//!
//! Topic order inside each category is the learning path; `prev`/`next` links
//! are derived from it when the store is assembled.

use crate::model::{Category, DocLink, DocumentContent, DocumentSummary};
use crate::store::DocumentStore;

struct TopicDef {
    title: &'static str,
    slug: &'static str,
    description: &'static str,
    read_time: &'static str,
    content: &'static str,
}

struct CategoryDef {
    title: &'static str,
    slug: &'static str,
    description: &'static str,
    topics: &'static [TopicDef],
}

/// Builds the store from the compiled-in tables.
pub fn builtin() -> DocumentStore {
    let mut categories = Vec::with_capacity(CATEGORIES.len());
    let mut documents = Vec::new();

    for def in CATEGORIES {
        let topics: Vec<DocumentSummary> = def
            .topics
            .iter()
            .map(|t| DocumentSummary {
                title: t.title.to_string(),
                slug: t.slug.to_string(),
                description: t.description.to_string(),
                read_time: Some(t.read_time.to_string()),
            })
            .collect();

        for (i, topic) in def.topics.iter().enumerate() {
            let link = |t: &TopicDef| DocLink {
                title: t.title.to_string(),
                slug: t.slug.to_string(),
            };
            let prev = i.checked_sub(1).map(|p| link(&def.topics[p]));
            let next = def.topics.get(i + 1).map(link);

            documents.push((
                def.slug.to_string(),
                topic.slug.to_string(),
                DocumentContent {
                    title: topic.title.to_string(),
                    description: topic.description.to_string(),
                    content: topic.content.trim().to_string(),
                    next,
                    prev,
                },
            ));
        }

        categories.push(Category {
            title: def.title.to_string(),
            slug: def.slug.to_string(),
            description: def.description.to_string(),
            topics,
        });
    }

    DocumentStore::new(categories, documents).expect("built-in catalog is valid")
}

const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        title: "Getting Started",
        slug: "getting-started",
        description: "Everything you need to begin your Flutter journey",
        topics: GETTING_STARTED,
    },
    CategoryDef {
        title: "Widgets",
        slug: "widgets",
        description: "Learn about Flutter's UI building blocks",
        topics: WIDGETS,
    },
    CategoryDef {
        title: "Layout",
        slug: "layout",
        description: "Arrange widgets on the screen effectively",
        topics: LAYOUT,
    },
    CategoryDef {
        title: "State Management",
        slug: "state",
        description: "Managing app state and data flow in Flutter",
        topics: STATE,
    },
    CategoryDef {
        title: "Navigation",
        slug: "navigation",
        description: "Moving between screens and handling routes",
        topics: NAVIGATION,
    },
    CategoryDef {
        title: "Network & Data",
        slug: "network",
        description: "Working with APIs and persistent storage",
        topics: NETWORK,
    },
];

const GETTING_STARTED: &[TopicDef] = &[
    TopicDef {
        title: "Installation",
        slug: "installation",
        description: "Set up Flutter SDK on your system",
        read_time: "3 min",
        content: r##"
## System Requirements

Before installing Flutter, ensure your development environment meets these requirements:

- **Operating System**: Windows 10 or later, macOS 10.15 or later, or Linux
- **Disk Space**: At least 2.5 GB (not including IDE/tools)
- **Tools**: Git, a proper code editor (VS Code, Android Studio, etc.)

## Download Flutter SDK

1. **Download the SDK**: Head to flutter.dev and download the latest stable release
2. **Extract the archive**: Place it in a location where you have write permissions

```bash
# On macOS/Linux, you might use:
cd ~/development
unzip ~/Downloads/flutter_sdk.zip
```

## Add Flutter to your path

Add Flutter to your PATH variable so you can run Flutter commands from any terminal window.

```bash
# On macOS/Linux, add to .bashrc or .zshrc:
export PATH="$PATH:$HOME/development/flutter/bin"
```

## Run flutter doctor

Verify your installation and check for any dependencies you still need to install:

```bash
flutter doctor
```

Follow the instructions to complete any remaining setup steps.
"##,
    },
    TopicDef {
        title: "Setup Editor",
        slug: "setup-editor",
        description: "Configure VS Code or Android Studio for Flutter development",
        read_time: "5 min",
        content: r##"
## Choose Your Editor

Flutter provides first-class support for two primary editors:

1. **Visual Studio Code**: A lightweight, cross-platform editor
2. **Android Studio/IntelliJ IDEA**: Full-featured IDEs with robust tooling

This guide covers setting up both options.

## VS Code Setup

1. **Install VS Code** from code.visualstudio.com
2. **Install Flutter Extension**
   - Launch VS Code
   - Open the Extensions view (Ctrl+Shift+X / Cmd+Shift+X)
   - Search for "Flutter"
   - Click Install on the Flutter extension by Dart Code

```dart
// The extension provides:
// - Syntax highlighting
// - Code completion
// - Widget editing assists
// - Debugging support
```

3. **Verify Setup**
   - Open the Command Palette (Ctrl+Shift+P / Cmd+Shift+P)
   - Type "Flutter: New Project"
   - If the command is available, your setup is complete

## Android Studio Setup

1. **Install Android Studio** from developer.android.com
2. **Install Flutter Plugin**
   - Start Android Studio
   - Open Preferences > Plugins (on macOS) or File > Settings > Plugins (on Windows/Linux)
   - Search for "Flutter"
   - Click Install and restart the IDE when prompted
3. **Verify Setup**
   - If set up correctly, you'll see "Start a new Flutter project" on the welcome screen
"##,
    },
    TopicDef {
        title: "First App",
        slug: "first-app",
        description: "Create and run your first Flutter application",
        read_time: "8 min",
        content: r##"
## Create a Project

Use the command line tool to generate a starter project:

```bash
flutter create my_app
cd my_app
```

## Run the App

Connect a device or start an emulator, then run:

```bash
flutter run
```

Press **r** in the terminal for a hot reload and **R** for a hot restart.

## Edit the Main Widget

Open `lib/main.dart` and replace its contents with a minimal app:

```dart
import 'package:flutter/material.dart';

void main() => runApp(const MyApp());

class MyApp extends StatelessWidget {
  const MyApp({super.key});

  @override
  Widget build(BuildContext context) {
    return const MaterialApp(
      home: Scaffold(
        body: Center(child: Text('Hello Flutter!')),
      ),
    );
  }
}
```

Save the file and the running app updates in place.
"##,
    },
    TopicDef {
        title: "Project Structure",
        slug: "project-structure",
        description: "Understanding Flutter project organization",
        read_time: "4 min",
        content: r##"
## Top-Level Layout

A new project contains a handful of important entries:

- **lib/**: Dart source code, starting at `main.dart`
- **test/**: Unit and widget tests
- **android/** and **ios/**: Platform host projects
- **pubspec.yaml**: Package metadata, dependencies and assets

## The pubspec File

Dependencies are declared in `pubspec.yaml`:

```yaml
dependencies:
  flutter:
    sdk: flutter
  http: ^1.2.0
```

Run `flutter pub get` after editing it.

## Organizing lib/

As the app grows, split code by feature:

1. Keep screens under `lib/screens/`
2. Put reusable widgets under `lib/widgets/`
3. Move models and services into their own folders
"##,
    },
];

const WIDGETS: &[TopicDef] = &[
    TopicDef {
        title: "Basic Widgets",
        slug: "basic-widgets",
        description: "Text, Image, Icon, and other fundamental widgets",
        read_time: "6 min",
        content: r##"
## Everything Is a Widget

Flutter UIs are trees of small, immutable widgets. The most common leaves are:

- **Text**: A run of styled text
- **Image**: Pictures from assets, files or the network
- **Icon**: Glyphs from an icon font

## Example

```dart
Column(
  children: const [
    Text('Welcome', style: TextStyle(fontSize: 24)),
    Icon(Icons.favorite, color: Colors.red),
  ],
)
```

## Stateless vs Stateful

A **StatelessWidget** depends only on its configuration. A **StatefulWidget** keeps mutable state in a separate State object.
"##,
    },
    TopicDef {
        title: "Layout Widgets",
        slug: "layout-widgets",
        description: "Container, Row, Column, and other layout widgets",
        read_time: "7 min",
        content: r##"
## Single-Child Layouts

- **Container**: Padding, margins, decoration and size
- **Center**: Centers its child
- **Padding**: Insets its child

## Multi-Child Layouts

- **Row**: Lays children out horizontally
- **Column**: Lays children out vertically
- **Stack**: Overlaps children

```dart
Row(
  mainAxisAlignment: MainAxisAlignment.spaceBetween,
  children: const [
    Text('Left'),
    Text('Right'),
  ],
)
```

### Flexible Children

Wrap a child in **Expanded** to let it fill the remaining space along the main axis.
"##,
    },
    TopicDef {
        title: "Material Components",
        slug: "material-components",
        description: "Button, AppBar, Card, and other Material Design widgets",
        read_time: "8 min",
        content: r##"
## Scaffold

`Scaffold` provides the standard Material page structure: app bar, body, floating action button and drawers.

```dart
Scaffold(
  appBar: AppBar(title: const Text('Home')),
  body: const Card(
    child: ListTile(title: Text('A card')),
  ),
  floatingActionButton: FloatingActionButton(
    onPressed: () {},
    child: const Icon(Icons.add),
  ),
)
```

## Buttons

1. **ElevatedButton**: Primary actions
2. **TextButton**: Low-emphasis actions
3. **OutlinedButton**: Medium emphasis

## Theming

Set a `ThemeData` on `MaterialApp` to style every component consistently.
"##,
    },
    TopicDef {
        title: "Cupertino Widgets",
        slug: "cupertino-widgets",
        description: "iOS-style widgets for your Flutter apps",
        read_time: "5 min",
        content: r##"
## Cupertino Library

Import `package:flutter/cupertino.dart` to use widgets that follow Apple's Human Interface Guidelines.

- **CupertinoApp**: App root with iOS defaults
- **CupertinoNavigationBar**: iOS-style top bar
- **CupertinoButton**: Flat iOS button

```dart
CupertinoPageScaffold(
  navigationBar: const CupertinoNavigationBar(middle: Text('Settings')),
  child: Center(
    child: CupertinoButton(
      onPressed: () {},
      child: const Text('Tap me'),
    ),
  ),
)
```

## Adaptive Widgets

Some Material widgets offer an `.adaptive` constructor that picks the platform look automatically.
"##,
    },
];

const LAYOUT: &[TopicDef] = &[
    TopicDef {
        title: "Responsive Layout",
        slug: "responsive-layout",
        description: "Building adaptive UIs for different screen sizes",
        read_time: "7 min",
        content: r##"
## Measure the Available Space

Use **LayoutBuilder** to react to the constraints given by the parent:

```dart
LayoutBuilder(
  builder: (context, constraints) {
    if (constraints.maxWidth > 600) {
      return const WideLayout();
    }
    return const NarrowLayout();
  },
)
```

## Screen Information

`MediaQuery.sizeOf(context)` returns the size of the whole screen.

- Prefer parent constraints for reusable widgets
- Use breakpoints sparingly
"##,
    },
    TopicDef {
        title: "Constraints",
        slug: "constraints",
        description: "Understanding Flutter's constraint system",
        read_time: "9 min",
        content: r##"
## The Rule

Constraints go down. Sizes go up. Parent sets position.

1. A parent passes minimum and maximum width and height to each child
2. The child picks a size within those limits
3. The parent decides where the child is placed

## Tight and Loose

A **tight** constraint has equal minimum and maximum. A **loose** constraint has a minimum of zero.

```dart
ConstrainedBox(
  constraints: const BoxConstraints(maxWidth: 300),
  child: const Text('At most 300 pixels wide'),
)
```
"##,
    },
    TopicDef {
        title: "Box Model",
        slug: "box-model",
        description: "Margins, padding, and borders in Flutter",
        read_time: "6 min",
        content: r##"
## Spacing

`Container` combines margin, padding and decoration:

```dart
Container(
  margin: const EdgeInsets.all(8),
  padding: const EdgeInsets.symmetric(horizontal: 16, vertical: 8),
  decoration: BoxDecoration(
    border: Border.all(color: Colors.blue),
    borderRadius: BorderRadius.circular(4),
  ),
  child: const Text('Boxed'),
)
```

## Order of Layers

- **margin** sits outside the decoration
- **decoration** paints the border and background
- **padding** sits inside, around the child
"##,
    },
];

const STATE: &[TopicDef] = &[
    TopicDef {
        title: "StatefulWidget",
        slug: "stateful-widget",
        description: "Understanding local state in Flutter",
        read_time: "5 min",
        content: r##"
## Local State

A `StatefulWidget` stores mutable values in its `State` object and calls `setState` to rebuild.

```dart
class Counter extends StatefulWidget {
  const Counter({super.key});

  @override
  State<Counter> createState() => _CounterState();
}

class _CounterState extends State<Counter> {
  int _count = 0;

  @override
  Widget build(BuildContext context) {
    return TextButton(
      onPressed: () => setState(() => _count++),
      child: Text('$_count'),
    );
  }
}
```

## Lifecycle

1. **initState**: One-time setup
2. **build**: Called on every rebuild
3. **dispose**: Release controllers and subscriptions
"##,
    },
    TopicDef {
        title: "Provider",
        slug: "provider",
        description: "Simple state management for Flutter",
        read_time: "8 min",
        content: r##"
## Sharing State

The provider package exposes objects to the widget tree below it.

```dart
ChangeNotifierProvider(
  create: (_) => CartModel(),
  child: const MyApp(),
)
```

## Reading Values

- `context.watch<T>()` rebuilds when the value changes
- `context.read<T>()` reads once, typically inside callbacks

Call **notifyListeners** in your model after every change.
"##,
    },
    TopicDef {
        title: "Riverpod",
        slug: "riverpod",
        description: "A modern approach to state management",
        read_time: "10 min",
        content: r##"
## Providers Without Context

Riverpod declares providers as global, immutable values and resolves them through a `ProviderScope`.

```dart
final counterProvider = StateProvider<int>((ref) => 0);

class CounterView extends ConsumerWidget {
  const CounterView({super.key});

  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final count = ref.watch(counterProvider);
    return Text('$count');
  }
}
```

## Why Use It

- Compile-time safety for lookups
- Easy overriding in tests
- Automatic disposal of unused state
"##,
    },
    TopicDef {
        title: "Bloc",
        slug: "bloc",
        description: "Business Logic Component pattern for Flutter",
        read_time: "12 min",
        content: r##"
## Events In, States Out

A bloc receives **events** and emits **states**. Widgets dispatch events and rebuild from states.

```dart
class CounterCubit extends Cubit<int> {
  CounterCubit() : super(0);

  void increment() => emit(state + 1);
}
```

## Wiring It Up

1. Provide the bloc with `BlocProvider`
2. Rebuild with `BlocBuilder`
3. Run side effects with `BlocListener`
"##,
    },
];

const NAVIGATION: &[TopicDef] = &[
    TopicDef {
        title: "Navigator",
        slug: "navigator",
        description: "Basic navigation in Flutter",
        read_time: "5 min",
        content: r##"
## Pushing and Popping

The `Navigator` keeps a stack of pages.

```dart
Navigator.push(
  context,
  MaterialPageRoute(builder: (_) => const DetailsPage()),
);

Navigator.pop(context);
```

## Returning Data

`Navigator.pop(context, value)` completes the future returned by `push` with **value**.
"##,
    },
    TopicDef {
        title: "Named Routes",
        slug: "named-routes",
        description: "Using named routes for cleaner navigation",
        read_time: "7 min",
        content: r##"
## Declaring Routes

Register a table of names on `MaterialApp`:

```dart
MaterialApp(
  initialRoute: '/',
  routes: {
    '/': (_) => const HomePage(),
    '/settings': (_) => const SettingsPage(),
  },
)
```

## Navigating by Name

Call `Navigator.pushNamed(context, '/settings')` to open a page.

- Pass arguments with the **arguments** parameter
- Read them with `ModalRoute.of(context)!.settings.arguments`
"##,
    },
    TopicDef {
        title: "Navigation 2.0",
        slug: "navigation-2",
        description: "Advanced declarative navigation APIs",
        read_time: "10 min",
        content: r##"
## Declarative Pages

The Router API describes the page stack as data and rebuilds it from app state.

- **RouterDelegate**: Builds the Navigator from state
- **RouteInformationParser**: Converts URLs to state
- **Pages**: The declarative list of screens

## Packages

Most apps use a routing package built on this API:

```dart
final router = GoRouter(
  routes: [
    GoRoute(path: '/', builder: (_, __) => const HomePage()),
  ],
);
```
"##,
    },
];

const NETWORK: &[TopicDef] = &[
    TopicDef {
        title: "HTTP Requests",
        slug: "http-requests",
        description: "Making network calls in Flutter",
        read_time: "6 min",
        content: r##"
## The http Package

Add `http` to your dependencies and fetch data asynchronously:

```dart
import 'package:http/http.dart' as http;

Future<String> fetchAlbum() async {
  final response = await http.get(
    Uri.parse('https://jsonplaceholder.typicode.com/albums/1'),
  );
  if (response.statusCode != 200) {
    throw Exception('Failed to load album');
  }
  return response.body;
}
```

## Showing Results

Use **FutureBuilder** to display loading, error and data states.
"##,
    },
    TopicDef {
        title: "JSON Parsing",
        slug: "json-parsing",
        description: "Converting JSON data to Dart objects",
        read_time: "8 min",
        content: r##"
## Manual Decoding

`dart:convert` turns a JSON string into maps and lists:

```dart
class Album {
  final int id;
  final String title;

  Album({required this.id, required this.title});

  factory Album.fromJson(Map<String, dynamic> json) {
    return Album(id: json['id'] as int, title: json['title'] as String);
  }
}
```

## Code Generation

For larger models, generate `fromJson`/`toJson` with **json_serializable** and `build_runner`.
"##,
    },
    TopicDef {
        title: "Local Storage",
        slug: "local-storage",
        description: "Persisting data on the device",
        read_time: "7 min",
        content: r##"
## Key-Value Storage

`shared_preferences` stores small values such as settings:

```dart
final prefs = await SharedPreferences.getInstance();
await prefs.setBool('darkMode', true);
```

## Other Options

- **Files**: Read and write with `path_provider` and `dart:io`
- **SQLite**: Structured data with the sqflite package
- **Key-value databases**: Fast local stores for larger datasets
"##,
    },
];
