// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Starter sources per renderer and diagram type.
//!
//! Lookup prefers a renderer-specific template and falls back to the generic (Mermaid-syntax)
//! template for the diagram type.

const MERMAID_FLOWCHART: &str = "graph TD
    A[Start] --> B{Condition}
    B -->|yes| C[Handle yes]
    B -->|no| D[Handle no]
    C --> E[End]
    D --> E";

const MERMAID_SEQUENCE: &str = "sequenceDiagram
    participant User
    participant System
    participant Database

    User->>System: Submit form
    System->>System: Validate form
    System->>Database: Save record
    Database-->>System: Result
    System-->>User: Show confirmation";

const MERMAID_STATE: &str = "stateDiagram-v2
    [*] --> Pending
    Pending --> Processing: start
    Processing --> Done: finish
    Processing --> Cancelled: cancel
    Done --> [*]
    Cancelled --> [*]";

const MERMAID_CLASS: &str = "classDiagram
    class Animal {
        +String name
        +makeSound()
    }
    class Dog {
        +fetch()
    }
    class Cat {
        +scratch()
    }
    Animal <|-- Dog
    Animal <|-- Cat";

const MERMAID_GANTT: &str = "gantt
    title Release plan
    dateFormat YYYY-MM-DD
    axisFormat %m/%d
    section Planning
    Requirements      : a1, 2023-03-01, 10d
    Design            : a2, after a1, 7d
    section Build
    Implementation    : b1, after a2, 20d
    Testing           : b2, after b1, 10d
    Release           : milestone, after b2, 0d";

const MERMAID_PIE: &str = "pie showData
    title Traffic sources
    \"Search\" : 55
    \"Direct\" : 30
    \"Referral\" : 15";

const MERMAID_ER: &str = "erDiagram
    CUSTOMER ||--o{ ORDER : places
    ORDER ||--|{ LINE_ITEM : contains
    PRODUCT ||--o{ LINE_ITEM : \"ordered in\"";

const MERMAID_JOURNEY: &str = "journey
    title Online purchase
    section Browse
      Search product: 4: Customer
      Compare prices: 3: Customer
    section Checkout
      Pay: 2: Customer, Payment service
      Receive receipt: 5: Customer";

const PLANTUML_CLASS: &str = "@startuml
class Vehicle {
  +wheels: int
  +drive()
}
class Car
class Truck
Vehicle <|-- Car
Vehicle <|-- Truck
@enduml";

const PLANTUML_SEQUENCE: &str = "@startuml
participant Browser
participant Server
Browser -> Server: GET /orders
Server --> Browser: 200 OK
@enduml";

const PLANTUML_USECASE: &str = "@startuml
left to right direction
actor Customer
actor Clerk
rectangle Shop {
  usecase \"Browse catalog\" as UC1
  usecase \"Check out\" as UC2
}
Customer --> UC1
Customer --> UC2
Clerk --> UC2
@enduml";

const PLANTUML_ACTIVITY: &str = "@startuml
start
:Receive order;
if (In stock?) then (yes)
  :Ship order;
else (no)
  :Place back order;
endif
stop
@enduml";

const PLANTUML_COMPONENT: &str = "@startuml
package \"Frontend\" {
  [Web App]
}
component Billing
interface REST
[Web App] --> REST
REST - Billing
@enduml";

const PLANTUML_STATE: &str = "@startuml
[*] --> Idle
Idle --> Running : begin
Running --> Idle : halt
Running --> [*]
@enduml";

const GRAPHVIZ_DIGRAPH: &str = "digraph G {
    rankdir=LR;
    node [shape=box];
    parse -> check -> emit;
    check -> report [label=\"error\"];
}";

const GRAPHVIZ_GRAPH: &str = "graph G {
    a -- b;
    b -- c;
    c -- a;
    c -- d;
}";

const GRAPHVIZ_STRICT: &str = "strict digraph G {
    a -> b;
    a -> b;
    b -> c;
}";

const MATHJAX_MATH: &str = r"\begin{align}
  f(x) &= \int_{-\infty}^{\infty} \hat{f}(\xi)\, e^{2 \pi i \xi x} \, d\xi \\
  \sum_{n=1}^{\infty} \frac{1}{n^2} &= \frac{\pi^2}{6}
\end{align}";

const FLOWCHARTJS_FLOWCHART: &str = "st=>start: Start
op=>operation: Process
cond=>condition: Confirmed?
e=>end: End
st->op->cond
cond(yes)->e
cond(no)->op";

/// `(renderer, type_id, source)`.
const RENDERER_TEMPLATES: &[(&str, &str, &str)] = &[
    ("mermaid", "flowchart", MERMAID_FLOWCHART),
    ("mermaid", "sequence", MERMAID_SEQUENCE),
    ("mermaid", "state", MERMAID_STATE),
    ("mermaid", "class", MERMAID_CLASS),
    ("mermaid", "gantt", MERMAID_GANTT),
    ("mermaid", "pie", MERMAID_PIE),
    ("mermaid", "er", MERMAID_ER),
    ("mermaid", "journey", MERMAID_JOURNEY),
    ("plantuml", "class", PLANTUML_CLASS),
    ("plantuml", "sequence", PLANTUML_SEQUENCE),
    ("plantuml", "usecase", PLANTUML_USECASE),
    ("plantuml", "activity", PLANTUML_ACTIVITY),
    ("plantuml", "component", PLANTUML_COMPONENT),
    ("plantuml", "state", PLANTUML_STATE),
    ("graphviz", "digraph", GRAPHVIZ_DIGRAPH),
    ("graphviz", "graph", GRAPHVIZ_GRAPH),
    ("graphviz", "strict", GRAPHVIZ_STRICT),
    ("mathjax", "math", MATHJAX_MATH),
    ("flowchartjs", "flowchart", FLOWCHARTJS_FLOWCHART),
];

const GENERIC_TEMPLATES: &[(&str, &str)] = &[
    ("flowchart", MERMAID_FLOWCHART),
    ("sequence", MERMAID_SEQUENCE),
    ("state", MERMAID_STATE),
    ("class", MERMAID_CLASS),
];

pub fn renderer_template(renderer: &str, type_id: &str) -> Option<&'static str> {
    RENDERER_TEMPLATES
        .iter()
        .find(|(r, t, _)| *r == renderer && *t == type_id)
        .map(|(_, _, source)| *source)
}

pub fn generic_template(type_id: &str) -> Option<&'static str> {
    GENERIC_TEMPLATES.iter().find(|(t, _)| *t == type_id).map(|(_, source)| *source)
}

pub fn template_for(renderer: &str, type_id: &str) -> Option<&'static str> {
    renderer_template(renderer, type_id).or_else(|| generic_template(type_id))
}
